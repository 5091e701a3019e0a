use std::io;

use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("Failed to read template {path}: {source}")]
    TemplateRead { path: String, source: io::Error },

    #[error("Dashboard document is empty")]
    EmptyDocument,
}

impl PageError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PageError::TemplateRead { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            PageError::EmptyDocument => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
