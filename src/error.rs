use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Audio file not found")]
    AudioNotFound,

    #[error("Translation failed: {0}")]
    Translation(String),

    #[error("Speech generation failed: {0}")]
    Synthesis(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::AudioNotFound => StatusCode::NOT_FOUND,
            AppError::Translation(_) | AppError::Synthesis(_) | AppError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let message = self.to_string();

        tracing::error!("Request failed: {} - {}", status, message);

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
