use actix_web::http::StatusCode;
use actix_web::{error, HttpResponse};
use thiserror::Error;

use crate::core::ValidationError;
use crate::models::ErrorResponse;
use crate::services::StoreError;

/// Errors returned by the HTTP handlers
///
/// Validation failures go back to the caller verbatim. Storage failures are
/// logged in full and answered with a fixed message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{message}")]
    Storage {
        message: &'static str,
        #[source]
        source: StoreError,
    },

    #[error("{0}")]
    BadPayload(String),
}

impl ApiError {
    /// Wrap a store failure with the message the caller will see
    pub fn storage(message: &'static str, source: StoreError) -> Self {
        tracing::error!("{}: {}", message, source);
        ApiError::Storage { message, source }
    }
}

impl error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadPayload(_) => StatusCode::BAD_REQUEST,
            ApiError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.to_string()))
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ApiError::BadPayload(format!("Invalid JSON: {}", err)).into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("Query error on {}: {}", req.path(), err);
    ApiError::BadPayload(format!("Invalid query: {}", err)).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_status_codes() {
        let validation = ApiError::from(ValidationError::NotANumber("lat"));
        assert_eq!(validation.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(validation.to_string(), "lat must be a finite number");

        let storage = ApiError::storage(
            "Database error while adding school",
            StoreError::from(sqlx::Error::PoolTimedOut),
        );
        assert_eq!(storage.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_storage_message_hides_cause() {
        let storage = ApiError::storage(
            "Database error while listing schools",
            StoreError::from(sqlx::Error::PoolClosed),
        );
        assert_eq!(storage.to_string(), "Database error while listing schools");
    }
}
