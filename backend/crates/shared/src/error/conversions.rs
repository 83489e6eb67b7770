//! Error conversions - [`AppError`] to HTTP
//!
//! The error body shape, and behind the `axum` feature the response itself.

use super::app_error::AppError;

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

/// Wire shape of every error response: `{ "error": "<message>" }`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = ErrorBody {
            error: self.public_message().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_shape() {
        let body = ErrorBody {
            error: "Email and password are required".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "error": "Email and password are required" })
        );
    }

    #[cfg(feature = "axum")]
    #[test]
    fn test_into_response_masks_server_errors() {
        use crate::error::kind::ErrorKind;
        use axum::response::IntoResponse;

        let response = AppError::new(ErrorKind::InternalServerError, "db exploded").into_response();
        assert_eq!(response.status(), 500);

        let response = AppError::new(ErrorKind::BadRequest, "nope").into_response();
        assert_eq!(response.status(), 400);
    }
}
