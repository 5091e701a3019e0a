use axum::http::StatusCode;
use envsense_api::models::SampleField;
use rand::distr::uniform;

#[derive(Debug, thiserror::Error)]
pub enum SampleError {
    #[error("Invalid {field} range: {source}")]
    InvalidRange {
        field: SampleField,
        source: uniform::Error,
    },

    #[error("Generated {field} value {value} is out of range")]
    OutOfRange { field: SampleField, value: f64 },
}

impl SampleError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SampleError::InvalidRange { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            SampleError::OutOfRange { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
