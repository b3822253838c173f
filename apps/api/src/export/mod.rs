//! Export backends: word-processor (.docx) and page-description (.pdf).
//!
//! Both consume the same `ResumeRecord` + `TemplateConfig` pair the preview
//! does, and both reproduce the layout contract in their own unit system.

pub mod docx;
pub mod handlers;
pub mod pdf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("unknown template '{0}'")]
    TemplateNotFound(String),
    #[error("document serialization failed: {0}")]
    Serialization(String),
}
