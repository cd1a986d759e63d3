// HTTP API Error Types
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::auth::AuthError;
use crate::database::DatabaseError;
use crate::services::{BrandError, SettingsError};

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),
    ValidationError(String),
    AlreadyDeleted {
        message: String,
        details: Option<Value>,
    },

    // 401 Unauthorized
    Unauthorized(String),

    // 404 Not Found
    NotFound(String),

    // 409 Conflict
    Conflict {
        message: String,
        details: Option<Value>,
    },

    // 500 Internal Server Error
    InternalServerError(String),

    // 503 Service Unavailable
    ServiceUnavailable(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::BadRequest(_) => 400,
            ApiError::ValidationError(_) => 400,
            ApiError::AlreadyDeleted { .. } => 400,
            ApiError::Unauthorized(_) => 401,
            ApiError::NotFound(_) => 404,
            ApiError::Conflict { .. } => 409,
            ApiError::InternalServerError(_) => 500,
            ApiError::ServiceUnavailable(_) => 503,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::ValidationError(msg) => msg,
            ApiError::AlreadyDeleted { message, .. } => message,
            ApiError::Unauthorized(msg) => msg,
            ApiError::NotFound(msg) => msg,
            ApiError::Conflict { message, .. } => message,
            ApiError::InternalServerError(msg) => msg,
            ApiError::ServiceUnavailable(msg) => msg,
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        let mut response = json!({
            "error": true,
            "message": self.message(),
            "code": self.error_code()
        });

        if let ApiError::Conflict {
            details: Some(details), ..
        }
        | ApiError::AlreadyDeleted {
            details: Some(details), ..
        } = self
        {
            response["details"] = details.clone();
        }

        response
    }

    /// Get error code for client handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::ValidationError(_) => "VALIDATION_ERROR",
            ApiError::AlreadyDeleted { .. } => "ALREADY_DELETED",
            ApiError::Unauthorized(_) => "UNAUTHORIZED",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Conflict { .. } => "CONFLICT",
            ApiError::InternalServerError(_) => "INTERNAL_SERVER_ERROR",
            ApiError::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
        }
    }
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn validation_error(message: impl Into<String>) -> Self {
        ApiError::ValidationError(message.into())
    }

    pub fn already_deleted(message: impl Into<String>, details: Option<Value>) -> Self {
        ApiError::AlreadyDeleted {
            message: message.into(),
            details,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ApiError::Conflict {
            message: message.into(),
            details: None,
        }
    }

    pub fn conflict_with(message: impl Into<String>, details: Value) -> Self {
        ApiError::Conflict {
            message: message.into(),
            details: Some(details),
        }
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        ApiError::ServiceUnavailable(message.into())
    }
}

// Convert other error types to ApiError
impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::StillReferenced(msg) => ApiError::conflict(format!("Still referenced: {}", msg)),
            DatabaseError::Duplicate(msg) => ApiError::conflict(format!("Already exists: {}", msg)),
            other => {
                tracing::error!("Database error: {}", other);
                ApiError::internal_server_error(format!("Database error: {}", other))
            }
        }
    }
}

impl From<BrandError> for ApiError {
    fn from(err: BrandError) -> Self {
        let message = err.to_string();
        match err {
            BrandError::NotFound(_) => ApiError::not_found(message),
            BrandError::HasDependents(counts) => ApiError::conflict_with(message, json!(counts)),
            BrandError::AlreadyDeleted { brand_id, deleted_at } => ApiError::already_deleted(
                message,
                Some(json!({ "brand_id": brand_id, "deleted_at": deleted_at })),
            ),
            BrandError::NotDeleted(_) | BrandError::AlreadyExists(_) => ApiError::conflict(message),
            BrandError::Invalid(msg) => ApiError::validation_error(msg),
            BrandError::Database(e) => e.into(),
        }
    }
}

impl From<SettingsError> for ApiError {
    fn from(err: SettingsError) -> Self {
        match err {
            SettingsError::Invalid(msg) => ApiError::validation_error(msg),
            SettingsError::Database(e) => e.into(),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidSecret | AuthError::TokenGeneration(_) => {
                tracing::error!("Token signing unavailable: {}", err);
                ApiError::internal_server_error(err.to_string())
            }
            other => ApiError::unauthorized(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_json())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::DependentCounts;

    #[test]
    fn conflict_carries_counts() {
        let err: ApiError = BrandError::HasDependents(DependentCounts {
            workspaces: 2,
            bots: 1,
            agents: 0,
        })
        .into();

        assert_eq!(err.status_code(), 409);
        let body = err.to_json();
        assert_eq!(body["code"], "CONFLICT");
        assert_eq!(body["details"]["workspaces"], 2);
        assert_eq!(body["details"]["bots"], 1);
        assert_eq!(body["details"]["agents"], 0);
        assert_eq!(
            body["message"],
            "Cannot delete brand with associated resources: 2 workspaces, 1 bots, 0 agents"
        );
    }

    #[test]
    fn lifecycle_errors_have_distinct_codes() {
        let not_found: ApiError = BrandError::NotFound("b".to_string()).into();
        let deleted: ApiError = BrandError::AlreadyDeleted {
            brand_id: "b".to_string(),
            deleted_at: None,
        }
        .into();

        assert_eq!((not_found.status_code(), not_found.error_code()), (404, "NOT_FOUND"));
        assert_eq!((deleted.status_code(), deleted.error_code()), (400, "ALREADY_DELETED"));
        assert_eq!(deleted.to_json()["details"]["brand_id"], "b");
    }

    #[test]
    fn unavailable_store_is_503() {
        let err = ApiError::service_unavailable("Database unavailable: pool closed");
        assert_eq!((err.status_code(), err.error_code()), (503, "SERVICE_UNAVAILABLE"));
        assert!(err.to_json().get("details").is_none());
    }

    #[test]
    fn store_failure_keeps_message() {
        let err: ApiError = DatabaseError::QueryError("disk I/O error".to_string()).into();
        assert_eq!(err.status_code(), 500);
        assert!(err.message().contains("disk I/O error"));
    }
}
