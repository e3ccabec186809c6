pub mod cors;
pub mod root;
pub mod tab;
pub use root::health_check_route;
pub use tab::{missing_tab_id_route, resolve_route, search_route, tab_route};

use std::sync::Arc;

use axum::{
    Json, Router,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;

use crate::controllers::TabSource;
use crate::models::tab::ErrorPayload;

#[derive(Clone)]
pub struct AppState {
    pub tabs: Arc<dyn TabSource>,
}

pub fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(ErrorPayload::new(message))).into_response()
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check_route))
        .route("/search", get(search_route))
        .route("/tab/", get(missing_tab_id_route))
        .route("/tab/{id}", get(tab_route))
        .route("/resolve", get(resolve_route))
        .layer(middleware::from_fn(cors::cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
