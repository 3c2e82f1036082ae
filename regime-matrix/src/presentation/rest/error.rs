use crate::application::{ComputeError, QueryError};
use crate::domain::MatrixError;
use crate::presentation::rest::dto::ErrorResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// API error type
#[derive(Debug)]
pub struct ApiError {
    pub code: &'static str,
    pub message: String,
    pub status: StatusCode,
}

impl ApiError {
    pub fn bad_request(code: &'static str, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            status: StatusCode::BAD_REQUEST,
        }
    }

    pub fn not_found(code: &'static str, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            status: StatusCode::NOT_FOUND,
        }
    }

    pub fn unprocessable(code: &'static str, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            status: StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::bad_request("INVALID_REQUEST", message)
    }

    pub fn invalid_label(label: &str, reason: &str) -> Self {
        Self::bad_request("INVALID_LABEL", format!("Invalid label '{}': {}", label, reason))
    }

    pub fn no_matrix() -> Self {
        Self::not_found("NO_MATRIX", "No transition matrix has been computed yet")
    }
}

impl From<MatrixError> for ApiError {
    fn from(e: MatrixError) -> Self {
        match e {
            MatrixError::InsufficientData { .. } => ApiError::unprocessable(e.code(), e.to_string()),
            _ => ApiError::bad_request(e.code(), e.to_string()),
        }
    }
}

impl From<ComputeError> for ApiError {
    fn from(e: ComputeError) -> Self {
        match e {
            ComputeError::InvalidRange { .. } | ComputeError::RangeTooLarge { .. } => {
                ApiError::bad_request("INVALID_RANGE", e.to_string())
            }
            ComputeError::Matrix(e) => e.into(),
        }
    }
}

impl From<QueryError> for ApiError {
    fn from(e: QueryError) -> Self {
        match e {
            QueryError::NoMatrix => ApiError::no_matrix(),
            QueryError::Matrix(e) => e.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(code = self.code, status = %self.status, "{}", self.message);
        let body = Json(ErrorResponse::new(self.code, self.message));
        (self.status, body).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "API Error {}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
