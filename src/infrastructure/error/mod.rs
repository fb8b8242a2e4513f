use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::product::ProductError;
use crate::template::TemplateError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Product(#[from] ProductError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

/// Check if running in production mode (based on RUN_MODE env var)
fn is_production() -> bool {
    std::env::var("RUN_MODE")
        .map(|m| m == "production" || m == "prod")
        .unwrap_or(false)
}

impl AppError {
    /// HTTP status and stable error code for this error
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Template(TemplateError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "TEMPLATE_NOT_FOUND")
            }
            AppError::Template(TemplateError::ProtectedResource(_)) => {
                (StatusCode::FORBIDDEN, "PROTECTED_TEMPLATE")
            }
            AppError::Template(TemplateError::InvalidTemplate(_)) => {
                (StatusCode::BAD_REQUEST, "INVALID_TEMPLATE")
            }
            AppError::Product(ProductError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "PRODUCT_NOT_FOUND")
            }
            AppError::Product(ProductError::Fixture(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let log_message = self.to_string();

        let client_message = if status.is_server_error() && is_production() {
            "Internal server error".to_string()
        } else {
            log_message.clone()
        };

        // Always log the detailed error server-side
        if status.is_server_error() {
            tracing::error!(
                code = %code,
                status = %status.as_u16(),
                message = %log_message,
                "API error"
            );
        } else {
            tracing::warn!(
                code = %code,
                status = %status.as_u16(),
                message = %log_message,
                "API request rejected"
            );
        }

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: client_message,
            },
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_errors_map_to_codes() {
        assert_eq!(
            AppError::from(TemplateError::NotFound(3)).status_and_code(),
            (StatusCode::NOT_FOUND, "TEMPLATE_NOT_FOUND")
        );
        assert_eq!(
            AppError::from(TemplateError::ProtectedResource(1)).status_and_code(),
            (StatusCode::FORBIDDEN, "PROTECTED_TEMPLATE")
        );
        assert_eq!(
            AppError::from(TemplateError::InvalidTemplate("x".into())).status_and_code(),
            (StatusCode::BAD_REQUEST, "INVALID_TEMPLATE")
        );
    }

    #[test]
    fn test_product_not_found_maps_to_404() {
        let err = AppError::from(ProductError::NotFound(8));
        assert_eq!(
            err.status_and_code(),
            (StatusCode::NOT_FOUND, "PRODUCT_NOT_FOUND")
        );
        assert_eq!(err.to_string(), "Product not found: 8");
    }

    #[test]
    fn test_fixture_error_is_internal() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = AppError::from(ProductError::from(parse_err));
        assert_eq!(
            err.status_and_code(),
            (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
        );
    }
}
