use axum::Json;
use serde::{Deserialize, Serialize};

use crate::diffing::{diff_records, reconstruct_plain_text, DiffSegment};
use crate::errors::AppError;
use crate::models::resume::ResumeRecord;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffRequest {
    pub old: ResumeRecord,
    pub new: ResumeRecord,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffResponse {
    pub segments: Vec<DiffSegment>,
    pub old_text: String,
    pub new_text: String,
}

/// POST /api/v1/diff
pub async fn handle_diff(Json(req): Json<DiffRequest>) -> Result<Json<DiffResponse>, AppError> {
    let segments = diff_records(&req.old, &req.new);
    Ok(Json(DiffResponse {
        segments,
        old_text: reconstruct_plain_text(&req.old),
        new_text: reconstruct_plain_text(&req.new),
    }))
}
