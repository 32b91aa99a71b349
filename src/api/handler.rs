use axum::{response::IntoResponse, Json};
use serde_json::json;

use crate::mock::generator::{generate_drifts, generate_metrics};

pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "DriftForce Backend Running",
        "version": "3.2.1"
    }))
}

pub async fn get_drifts() -> impl IntoResponse {
    Json(generate_drifts(&mut rand::thread_rng()))
}

pub async fn get_metrics() -> impl IntoResponse {
    Json(generate_metrics(&mut rand::thread_rng()))
}
