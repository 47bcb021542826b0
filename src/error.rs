use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Skill already exists")]
    AlreadyExists,

    #[error("Skill not found")]
    NotFound,

    #[error("not be able to update skill")]
    UpdateFailed,

    #[error("not be able to update skill {0}")]
    FieldUpdateFailed(&'static str),

    #[error("not be able to delete skill")]
    DeleteFailed,

    #[error("{0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::AlreadyExists
            | AppError::UpdateFailed
            | AppError::FieldUpdateFailed(_)
            | AppError::DeleteFailed
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "status": "error",
            "message": self.to_string(),
        }));
        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
