use std::borrow::Cow;
use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::Router;

use crate::errors::ApiError;
use crate::services::PageService;

#[derive(Clone)]
pub struct PageState {
    pub page_service: Arc<PageService>,
}

pub fn page_router(page_state: PageState) -> Router {
    Router::new()
        .route("/", get(get_dashboard))
        .route("/dashboard.html", get(get_dashboard))
        .with_state(page_state)
}

pub async fn get_dashboard(
    State(state): State<PageState>,
) -> Result<Html<Cow<'static, str>>, ApiError> {
    let document = state.page_service.render().await?;

    Ok(Html(document))
}
