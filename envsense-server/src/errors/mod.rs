pub mod api;
pub mod page;
pub mod sample;

pub use api::ApiError;
pub use page::PageError;
pub use sample::SampleError;

use axum::Json;
use axum::response::{IntoResponse, Response};
use envsense_api::models::ErrorBody;
use uuid::Uuid;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::SampleError(e) => {
                let error_id = Uuid::new_v4();
                tracing::error!(error_id = ?error_id, "Sample generation error: {}", e);

                let body = ErrorBody::new("Failed to generate data").with_id(error_id.to_string());

                (e.status_code(), Json(body)).into_response()
            }
            ApiError::PageError(e) => {
                tracing::error!("Dashboard rendering error: {}", e);

                (e.status_code(), format!("Error loading dashboard: {e}")).into_response()
            }
        }
    }
}
