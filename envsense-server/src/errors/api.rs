use super::{PageError, SampleError};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Sample error: {0}")]
    SampleError(#[from] SampleError),

    #[error("Page error: {0}")]
    PageError(#[from] PageError),
}
