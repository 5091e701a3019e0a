use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::configs::Settings;
use crate::errors::SampleError;
use crate::handles::*;
use crate::services::{PageService, RandomSampleSource, SampleSource};

pub fn create_app(settings: &Arc<Settings>) -> Result<Router, SampleError> {
    let sample_source = Arc::new(RandomSampleSource::new()?);
    let page_service = Arc::new(PageService::new(&settings.dashboard));

    Ok(build_router(sample_source, page_service))
}

pub fn build_router(sample_source: Arc<dyn SampleSource>, page_service: Arc<PageService>) -> Router {
    Router::new()
        .merge(data_router(DataState { sample_source }))
        .merge(page_router(PageState { page_service }))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
