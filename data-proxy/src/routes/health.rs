use axum::Json;

use crate::models::{HealthResponse, HelloResponse};

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: "Hello from data-proxy!".to_string(),
    })
}
