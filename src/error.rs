//! Error types for the BGG client
//!
//! This module defines the error hierarchy for the whole crate.
//! Builder entry points return `Result<T, Error>`; everything that happens
//! after a call is submitted is reported inside a [`crate::response::Response`].

use std::fmt;
use thiserror::Error;

/// The main error type for the BGG client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Construction Errors
    // ============================================================================
    #[error("Invalid request: {message}")]
    Construction { message: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to serialize JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Max retries ({max_retries}) exceeded")]
    MaxRetriesExceeded { max_retries: u32 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("No fixture registered for {url}")]
    FixtureNotFound { url: String },

    // ============================================================================
    // Mapping Errors
    // ============================================================================
    #[error(transparent)]
    Mapping(#[from] MappingError),

    // ============================================================================
    // Execution Errors
    // ============================================================================
    #[error("Call was cancelled before it resolved")]
    Cancelled,

    #[error("Execution task failed: {message}")]
    Execution { message: String },
}

impl Error {
    /// Create a construction error
    pub fn construction(message: impl Into<String>) -> Self {
        Self::Construction {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create an execution error
    pub fn execution(message: impl Into<String>) -> Self {
        Self::Execution {
            message: message.into(),
        }
    }
}

/// Result type alias for the BGG client
pub type Result<T> = std::result::Result<T, Error>;

// ============================================================================
// Mapping Errors
// ============================================================================

/// Why a document could not be mapped onto a domain record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MappingErrorKind {
    /// The root element does not belong to the requested endpoint
    SchemaMismatch,
    /// A required attribute or element is absent
    MissingField,
    /// A value could not be coerced to its field type
    TypeMismatch,
    /// An enumeration value is not recognized (strict policy only)
    UnknownEnumValue,
    /// The body is not well-formed XML
    MalformedDocument,
}

impl fmt::Display for MappingErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SchemaMismatch => "schema mismatch",
            Self::MissingField => "missing field",
            Self::TypeMismatch => "type mismatch",
            Self::UnknownEnumValue => "unknown enum value",
            Self::MalformedDocument => "malformed document",
        };
        f.write_str(name)
    }
}

/// Failure produced by the mapper
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct MappingError {
    /// Failure category
    pub kind: MappingErrorKind,
    /// Human readable detail, usually naming the offending field
    pub message: String,
}

impl MappingError {
    /// Create a mapping error of the given kind
    pub fn new(kind: MappingErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn schema_mismatch(message: impl Into<String>) -> Self {
        Self::new(MappingErrorKind::SchemaMismatch, message)
    }

    pub fn missing_field(element: &str, field: &str) -> Self {
        Self::new(
            MappingErrorKind::MissingField,
            format!("<{element}> is missing required '{field}'"),
        )
    }

    pub fn type_mismatch(field: &str, value: &str, expected: &str) -> Self {
        Self::new(
            MappingErrorKind::TypeMismatch,
            format!("'{field}' has value '{value}', expected {expected}"),
        )
    }

    pub fn unknown_enum(field: &str, value: &str) -> Self {
        Self::new(
            MappingErrorKind::UnknownEnumValue,
            format!("'{field}' has unrecognized value '{value}'"),
        )
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(MappingErrorKind::MalformedDocument, message)
    }
}
