use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::api::handler::{get_drifts, get_metrics, health_check};

pub fn create_router() -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/api/drifts", get(get_drifts))
        .route("/api/metrics", get(get_metrics))
        .layer(CorsLayer::permissive())
}
