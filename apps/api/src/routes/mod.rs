pub mod health;

use axum::{
    routing::{get, post},
    Json, Router,
};

use crate::diffing::handlers as diff_handlers;
use crate::export::handlers as export_handlers;
use crate::preview::handlers as preview_handlers;
use crate::state::AppState;
use crate::templates::{self, TemplateConfig};

/// GET /api/v1/templates
async fn list_templates() -> Json<Vec<&'static TemplateConfig>> {
    Json(templates::all().to_vec())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Template registry
        .route("/api/v1/templates", get(list_templates))
        // Edit sessions and interactive preview
        .route(
            "/api/v1/sessions",
            post(preview_handlers::handle_create_session),
        )
        .route(
            "/api/v1/sessions/:id",
            get(preview_handlers::handle_get_session),
        )
        .route(
            "/api/v1/sessions/:id/edits",
            post(preview_handlers::handle_commit_edit),
        )
        .route(
            "/api/v1/sessions/:id/preview",
            get(preview_handlers::handle_session_preview),
        )
        .route("/api/v1/preview", post(preview_handlers::handle_preview))
        // Export backends
        .route(
            "/api/v1/export/docx",
            post(export_handlers::handle_export_docx),
        )
        .route(
            "/api/v1/export/pdf",
            post(export_handlers::handle_export_pdf),
        )
        // Diffing
        .route("/api/v1/diff", post(diff_handlers::handle_diff))
        .with_state(state)
}
