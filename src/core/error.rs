use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Malformed or out-of-range input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Business rule violation (scheduling conflicts, cancel guards, delete guards)
    #[error("{0}")]
    BusinessRule(String),

    /// Resource not found
    #[error("{0}")]
    NotFound(String),

    /// Stock debit would drive the product quantity negative
    #[error("Not enough stock for product {product}. Requested: {requested} Available: {available}")]
    InsufficientStock {
        product: String,
        requested: i32,
        available: i32,
    },

    /// Database operation errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_message = self.to_string();

        HttpResponse::build(status_code).json(serde_json::json!({
            "error": {
                "message": error_message,
                "code": status_code.as_u16(),
            }
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::BusinessRule(_) => StatusCode::CONFLICT,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InsufficientStock { .. } => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Json(_) => StatusCode::BAD_REQUEST,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn business(msg: impl Into<String>) -> Self {
        AppError::BusinessRule(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_stock_message_carries_both_quantities() {
        let err = AppError::InsufficientStock {
            product: "Dog Food 10kg".to_string(),
            requested: 5,
            available: 2,
        };

        let msg = err.to_string();
        assert!(msg.contains("Requested: 5"));
        assert!(msg.contains("Available: 2"));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn business_rule_maps_to_conflict() {
        let err = AppError::business("This sale is already canceled");
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }
}
