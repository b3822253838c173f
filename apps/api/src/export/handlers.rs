use axum::{http::header, response::IntoResponse, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::export::{docx, pdf, ExportError};
use crate::models::resume::ResumeRecord;
use crate::state::AppState;
use crate::templates::{self, TemplateConfig};
use axum::extract::State;

const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const PDF_MIME: &str = "application/pdf";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub record: ResumeRecord,
    pub template: Option<String>,
}

/// POST /api/v1/export/docx
pub async fn handle_export_docx(
    State(_state): State<AppState>,
    Json(req): Json<ExportRequest>,
) -> Result<impl IntoResponse, AppError> {
    let config = resolve_template(req.template.as_deref())?;
    let bytes = docx::render_docx(&req.record, config)?;
    tracing::info!(
        template = config.id.as_str(),
        size = bytes.len(),
        "docx export complete"
    );
    Ok(attachment(bytes, DOCX_MIME, &filename(&req.record, "docx")))
}

/// POST /api/v1/export/pdf
pub async fn handle_export_pdf(
    State(_state): State<AppState>,
    Json(req): Json<ExportRequest>,
) -> Result<impl IntoResponse, AppError> {
    let config = resolve_template(req.template.as_deref())?;
    let bytes = pdf::render_pdf(&req.record, config)?;
    tracing::info!(
        template = config.id.as_str(),
        size = bytes.len(),
        "pdf export complete"
    );
    Ok(attachment(bytes, PDF_MIME, &filename(&req.record, "pdf")))
}

fn resolve_template(raw: Option<&str>) -> Result<&'static TemplateConfig, ExportError> {
    let raw = raw.unwrap_or("modern");
    templates::lookup(raw).ok_or_else(|| ExportError::TemplateNotFound(raw.to_string()))
}

fn attachment(bytes: Vec<u8>, mime: &'static str, name: &str) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, mime.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{name}\""),
            ),
        ],
        bytes,
    )
}

/// `Jane Doe` → `Jane_Doe_Resume.docx`; anything header-unsafe is dropped.
fn filename(record: &ResumeRecord, ext: &str) -> String {
    let base: String = record
        .full_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect();
    if base.is_empty() {
        format!("Resume.{ext}")
    } else {
        format!("{base}_Resume.{ext}")
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_from_full_name() {
        let record = ResumeRecord {
            full_name: "Jane Doe".to_string(),
            ..Default::default()
        };
        assert_eq!(filename(&record, "docx"), "Jane_Doe_Resume.docx");
    }

    #[test]
    fn test_filename_strips_unsafe_characters() {
        let record = ResumeRecord {
            full_name: "Jana Nováková \"JN\"".to_string(),
            ..Default::default()
        };
        assert_eq!(filename(&record, "pdf"), "Jana_Novkov_JN_Resume.pdf");
    }

    #[test]
    fn test_filename_falls_back_without_a_name() {
        assert_eq!(filename(&ResumeRecord::default(), "pdf"), "Resume.pdf");
    }

    #[test]
    fn test_unknown_template_is_rejected() {
        let err = resolve_template(Some("brutalist")).expect_err("unknown id");
        assert!(matches!(err, ExportError::TemplateNotFound(id) if id == "brutalist"));
    }

    #[test]
    fn test_template_defaults_to_modern() {
        let config = resolve_template(None).expect("default");
        assert_eq!(config.id.as_str(), "modern");
    }
}
