use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ResumeRecord;
use crate::models::update::FieldPath;
use crate::preview::session::SessionSnapshot;
use crate::preview::{html::render_html, render};
use crate::state::AppState;
use crate::templates::{self, TemplateConfig};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub record: ResumeRecord,
}

impl From<SessionSnapshot> for SessionResponse {
    fn from(snap: SessionSnapshot) -> Self {
        Self {
            session_id: snap.id,
            created_at: snap.created_at,
            updated_at: snap.updated_at,
            record: snap.record,
        }
    }
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
    Json(record): Json<ResumeRecord>,
) -> Result<Json<SessionResponse>, AppError> {
    let (id, _) = state.sessions.create(record);
    let snap = state
        .sessions
        .snapshot(id)
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
    tracing::info!(session_id = %id, "session opened");
    Ok(Json(snap.into()))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    let snap = state
        .sessions
        .snapshot(id)
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
    Ok(Json(snap.into()))
}

#[derive(Deserialize)]
pub struct EditRequest {
    pub path: FieldPath,
    pub value: String,
}

/// POST /api/v1/sessions/:id/edits
pub async fn handle_commit_edit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<EditRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let snap = state
        .sessions
        .commit(id, &req.path, &req.value)
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))??;
    Ok(Json(snap.into()))
}

#[derive(Deserialize)]
pub struct PreviewQuery {
    pub template: Option<String>,
    pub interactive: Option<bool>,
}

/// GET /api/v1/sessions/:id/preview?template=modern&interactive=true
pub async fn handle_session_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<PreviewQuery>,
) -> Result<Html<String>, AppError> {
    let snap = state
        .sessions
        .snapshot(id)
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
    let config = resolve_template(params.template.as_deref())?;
    let doc = render(&snap.record, config);
    Ok(Html(render_html(&doc, params.interactive.unwrap_or(true))))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatelessPreviewRequest {
    pub record: ResumeRecord,
    pub template: Option<String>,
    pub interactive: Option<bool>,
}

/// POST /api/v1/preview
/// One-shot render without opening a session; used for thumbnails.
pub async fn handle_preview(
    Json(req): Json<StatelessPreviewRequest>,
) -> Result<Html<String>, AppError> {
    let config = resolve_template(req.template.as_deref())?;
    let doc = render(&req.record, config);
    Ok(Html(render_html(&doc, req.interactive.unwrap_or(false))))
}

fn resolve_template(raw: Option<&str>) -> Result<&'static TemplateConfig, AppError> {
    let raw = raw.unwrap_or("modern");
    templates::lookup(raw).ok_or_else(|| AppError::NotFound(format!("Unknown template '{raw}'")))
}
