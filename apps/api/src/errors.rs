use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invocation {0} was superseded by a newer analysis")]
    Superseded(u64),

    #[error("Invocation {0} was cancelled")]
    Cancelled(u64),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Superseded(_) => (StatusCode::CONFLICT, "SUPERSEDED", self.to_string()),
            AppError::Cancelled(_) => (StatusCode::CONFLICT, "CANCELLED", self.to_string()),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::NotFound("x".to_string()), StatusCode::NOT_FOUND),
            (AppError::Superseded(3), StatusCode::CONFLICT),
            (AppError::Cancelled(3), StatusCode::CONFLICT),
        ];
        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_superseded_message_names_invocation() {
        assert_eq!(
            AppError::Superseded(7).to_string(),
            "Invocation 7 was superseded by a newer analysis"
        );
    }
}
