// src/error.rs - Error handling for API, storage, and form boundaries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// Field-keyed validation messages, as returned by 422-style responses and
/// produced by client-side form validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors(pub HashMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// First message for a field, for inline display under an input.
    pub fn first(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(|v| v.first()).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// 401 from the server; the session is gone.
    Unauthorized,
    /// Field-keyed validation failure (server 422 or client-side).
    Validation { errors: FieldErrors },
    /// Any other non-success HTTP status.
    Http { status: u16, endpoint: String },
    /// The request never produced a response.
    Network { endpoint: String },
    /// 404 on a detail fetch.
    NotFound { endpoint: String },
    Storage { key: Option<String> },
    Serialization,
    Configuration { key: Option<String> },
    Application,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
    pub source: String,
    pub timestamp: DateTime<Utc>,
}

impl Error {
    /// Creates a new error with the specified kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: "sellerdesk".to_string(),
            timestamp: Utc::now(),
        }
    }

    /// Sets the error source
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Creates an unauthorized (401) error
    pub fn unauthorized() -> Self {
        Self::new(ErrorKind::Unauthorized, "Session expired or invalid")
    }

    /// Creates a validation error from a field-keyed message map
    pub fn validation(errors: FieldErrors) -> Self {
        Self::new(ErrorKind::Validation { errors }, "Validation failed")
    }

    /// Creates an HTTP status error
    pub fn http(status: u16, endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::Http {
                status,
                endpoint: endpoint.into(),
            },
            message,
        )
    }

    /// Creates a network transport error
    pub fn network(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::Network {
                endpoint: endpoint.into(),
            },
            message,
        )
    }

    /// Creates a not-found error for a detail fetch
    pub fn not_found(endpoint: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::NotFound {
                endpoint: endpoint.into(),
            },
            "Resource not found",
        )
    }

    /// Creates a storage error
    pub fn storage(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::Storage {
                key: Some(key.into()),
            },
            message,
        )
    }

    /// Creates a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization, message)
    }

    /// Creates a configuration error
    pub fn config(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::Configuration {
                key: Some(key.into()),
            },
            message,
        )
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.kind, ErrorKind::Unauthorized)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::NotFound { .. })
    }

    /// Field errors when this is a validation failure, None otherwise.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match &self.kind {
            ErrorKind::Validation { errors } => Some(errors),
            _ => None,
        }
    }

    /// Whether a retry could plausibly succeed without user action.
    /// Only transport failures qualify; 4xx responses never do.
    pub fn is_retryable(&self) -> bool {
        matches!(self.kind, ErrorKind::Network { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.source, self.message)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::new(ErrorKind::Storage { key: None }, err.to_string()).source("std::io::Error")
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::new(ErrorKind::Serialization, err.to_string()).source("serde_json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_first() {
        let mut errors = FieldErrors::new();
        errors.push("email", "Email is required");
        errors.push("email", "Email must be valid");
        errors.push("name", "Name is required");

        assert_eq!(errors.first("email"), Some("Email is required"));
        assert_eq!(errors.first("name"), Some("Name is required"));
        assert_eq!(errors.first("missing"), None);
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_validation_error_carries_fields() {
        let mut fields = FieldErrors::new();
        fields.push("code", "Code already in use");
        let error = Error::validation(fields);

        let carried = error.field_errors().expect("validation error has fields");
        assert_eq!(carried.first("code"), Some("Code already in use"));
        assert!(!error.is_retryable());
    }

    #[test]
    fn test_unauthorized_detection() {
        assert!(Error::unauthorized().is_unauthorized());
        assert!(!Error::not_found("/seller/products/9").is_unauthorized());
        assert!(Error::not_found("/seller/products/9").is_not_found());
    }

    #[test]
    fn test_only_network_errors_retry() {
        assert!(Error::network("/seller/orders", "connection reset").is_retryable());
        assert!(!Error::http(500, "/seller/orders", "server error").is_retryable());
        assert!(!Error::unauthorized().is_retryable());
    }
}
