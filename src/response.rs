use axum::Json;
use serde::Serialize;

/// Success envelope: `{"status":"success","data":<payload>}`.
/// The error side is produced by `AppError::into_response`.
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub status: &'static str,
    pub data: T,
}

pub fn success<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse {
        status: "success",
        data,
    })
}

/// Message-only success body, used by delete.
#[derive(Serialize)]
pub struct StatusMessage {
    pub status: &'static str,
    pub message: String,
}
