use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use envsense_api::models::Sample;

use crate::errors::ApiError;
use crate::services::SampleSource;

#[derive(Clone)]
pub struct DataState {
    pub sample_source: Arc<dyn SampleSource>,
}

pub fn data_router(data_state: DataState) -> Router {
    Router::new()
        .route("/api/data", get(get_data))
        .with_state(data_state)
}

/// Every request evaluates the source anew.
pub async fn get_data(State(state): State<DataState>) -> Result<Json<Sample>, ApiError> {
    let sample = state.sample_source.sample()?;

    tracing::debug!(?sample, "Generated sample");

    Ok(Json(sample))
}
