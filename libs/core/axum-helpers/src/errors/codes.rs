//! Type-safe error codes for API responses.
//!
//! Each code has a string form sent to clients in the `error` field, an
//! integer form used in structured logs, and a default message.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! assert_eq!(code.default_message(), "Missing or invalid fields");
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::messages;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Required field missing or a field failed coercion
    ValidationError,

    /// Path identifier is not a well-formed ObjectId
    InvalidId,

    /// Requested resource was not found
    NotFound,

    /// Request conflicts with a stored record (duplicate unique field)
    Conflict,

    // Server errors
    /// A dependency such as the database is not reachable
    ServiceUnavailable,

    // Database errors (2000-2999)
    /// The document store rejected or failed an operation
    DatabaseError,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier for clients.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidId => "INVALID_ID",
            Self::NotFound => "NOT_FOUND",
            Self::Conflict => "CONFLICT",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::DatabaseError => "DATABASE_ERROR",
        }
    }

    /// Integer code for logs and monitoring.
    ///
    /// - 1000-1999: client and generic server errors
    /// - 2000-2999: database errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidId => 1002,
            Self::NotFound => 1004,
            Self::Conflict => 1008,
            Self::ServiceUnavailable => 1011,
            Self::DatabaseError => 2003,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => messages::VALIDATION_FAILED,
            Self::InvalidId => messages::INVALID_ID,
            Self::NotFound => messages::NOT_FOUND_RESOURCE,
            Self::Conflict => messages::CONFLICT,
            Self::ServiceUnavailable => messages::SERVICE_UNAVAILABLE,
            Self::DatabaseError => messages::DB_ERROR,
        }
    }

    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::ServiceUnavailable | Self::DatabaseError)
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_matches_as_str() {
        for code in [
            ErrorCode::ValidationError,
            ErrorCode::InvalidId,
            ErrorCode::NotFound,
            ErrorCode::Conflict,
            ErrorCode::ServiceUnavailable,
            ErrorCode::DatabaseError,
        ] {
            let json = serde_json::to_value(code).unwrap();
            assert_eq!(json, serde_json::json!(code.as_str()));
        }
    }

    #[test]
    fn test_client_error_classification() {
        assert!(ErrorCode::ValidationError.is_client_error());
        assert!(ErrorCode::InvalidId.is_client_error());
        assert!(ErrorCode::NotFound.is_client_error());
        assert!(ErrorCode::Conflict.is_client_error());
        assert!(!ErrorCode::ServiceUnavailable.is_client_error());
        assert!(!ErrorCode::DatabaseError.is_client_error());
    }
}
