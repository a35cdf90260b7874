use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Malformed model reply: {0}")]
    MalformedReply(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Stable user-facing summary; the variant detail goes in `message`.
    fn summary(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "Invalid request",
            AppError::Extraction(_) => "Failed to extract content",
            AppError::ModelUnavailable(_) => "Gemini API error",
            AppError::MalformedReply(_) => "Failed to generate quiz",
            AppError::Internal(_) => "Internal server error",
        }
    }

    fn detail(&self) -> &str {
        match self {
            AppError::Validation(msg)
            | AppError::Extraction(msg)
            | AppError::ModelUnavailable(msg)
            | AppError::MalformedReply(msg)
            | AppError::Internal(msg) => msg,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Extraction(_) => StatusCode::BAD_REQUEST,
            AppError::ModelUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::MalformedReply(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.summary().to_string(),
            message: self.detail().to_string(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::Validation("test".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Extraction("test".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::ModelUnavailable("test".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::MalformedReply("test".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_messages() {
        let err = AppError::Validation("No file uploaded".into());
        assert_eq!(err.to_string(), "Validation error: No file uploaded");
        assert_eq!(err.summary(), "Invalid request");
        assert_eq!(err.detail(), "No file uploaded");
    }
}
