use crate::state::AppState;
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct HelloResponse {
    pub message: String,
}

pub async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: "Hello, World".into(),
    })
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime: f64,
}

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".into(),
        uptime: state.uptime_secs(),
    })
}
