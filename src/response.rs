//! Response envelope
//!
//! Every submitted call resolves to a [`Response`]: either the mapped record
//! or a [`ResponseError`] describing what went wrong, together with the raw
//! payload when one was received.

use crate::error::{Error, MappingError, MappingErrorKind};
use serde::Serialize;
use std::fmt;

/// Outcome of one call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "body", rename_all = "snake_case")]
pub enum Response<T> {
    Success(T),
    Error(ResponseError),
}

impl<T> Response<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            Response::Success(data) => Some(data),
            Response::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ResponseError> {
        match self {
            Response::Success(_) => None,
            Response::Error(err) => Some(err),
        }
    }

    /// True when no error is present
    pub fn is_success(&self) -> bool {
        matches!(self, Response::Success(_))
    }

    pub fn is_error(&self) -> bool {
        !self.is_success()
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Response::Success(data) => Some(data),
            Response::Error(_) => None,
        }
    }

    pub fn into_result(self) -> std::result::Result<T, ResponseError> {
        match self {
            Response::Success(data) => Ok(data),
            Response::Error(err) => Err(err),
        }
    }

    /// Transform the payload, keeping errors as they are
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Response<U> {
        match self {
            Response::Success(data) => Response::Success(f(data)),
            Response::Error(err) => Response::Error(err),
        }
    }
}

// ============================================================================
// Response Error
// ============================================================================

/// Category of a failed call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseErrorKind {
    /// The request could not be turned into a URL
    InvalidRequest,
    Transport,
    SchemaMismatch,
    MissingField,
    TypeMismatch,
    UnknownEnumValue,
    MalformedDocument,
    PaginationAborted,
    Cancelled,
}

impl From<MappingErrorKind> for ResponseErrorKind {
    fn from(kind: MappingErrorKind) -> Self {
        match kind {
            MappingErrorKind::SchemaMismatch => Self::SchemaMismatch,
            MappingErrorKind::MissingField => Self::MissingField,
            MappingErrorKind::TypeMismatch => Self::TypeMismatch,
            MappingErrorKind::UnknownEnumValue => Self::UnknownEnumValue,
            MappingErrorKind::MalformedDocument => Self::MalformedDocument,
        }
    }
}

impl fmt::Display for ResponseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InvalidRequest => "invalid request",
            Self::Transport => "transport error",
            Self::SchemaMismatch => "schema mismatch",
            Self::MissingField => "missing field",
            Self::TypeMismatch => "type mismatch",
            Self::UnknownEnumValue => "unknown enum value",
            Self::MalformedDocument => "malformed document",
            Self::PaginationAborted => "pagination aborted",
            Self::Cancelled => "cancelled",
        };
        f.write_str(name)
    }
}

/// Error slot of a [`Response`]
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ResponseError {
    pub kind: ResponseErrorKind,
    pub message: String,
    /// Offending document or error text, when one was received
    pub raw: Option<String>,
    /// Page on which a paginated call failed
    pub page: Option<u32>,
}

impl ResponseError {
    pub fn new(kind: ResponseErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            raw: None,
            page: None,
        }
    }

    #[must_use]
    pub fn with_raw(mut self, raw: impl Into<String>) -> Self {
        self.raw = Some(raw.into());
        self
    }

    /// Mapping failure on a received document
    pub fn mapping(err: MappingError, raw: impl Into<String>) -> Self {
        Self::new(err.kind.into(), err.message).with_raw(raw)
    }

    /// Failure before any document was received
    pub fn from_error(err: &Error) -> Self {
        match err {
            Error::Mapping(mapping) => Self::new(mapping.kind.into(), mapping.message.clone()),
            Error::Construction { .. } | Error::InvalidUrl(_) => {
                Self::new(ResponseErrorKind::InvalidRequest, err.to_string())
            }
            Error::Cancelled => Self::new(ResponseErrorKind::Cancelled, err.to_string()),
            Error::HttpStatus { body, .. } => {
                Self::new(ResponseErrorKind::Transport, err.to_string()).with_raw(body.clone())
            }
            other => Self::new(ResponseErrorKind::Transport, other.to_string()),
        }
    }

    /// Wrap a failure that happened on page `page` of a paginated call
    #[must_use]
    pub fn aborted_at(self, page: u32) -> Self {
        Self {
            kind: ResponseErrorKind::PaginationAborted,
            message: format!("page {page}: {}: {}", self.kind, self.message),
            raw: self.raw,
            page: Some(page),
        }
    }
}

impl From<Error> for ResponseError {
    fn from(err: Error) -> Self {
        Self::from_error(&err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_success_accessors() {
        let response: Response<u32> = Response::Success(7);
        assert!(response.is_success());
        assert!(!response.is_error());
        assert_eq!(response.data(), Some(&7));
        assert_eq!(response.error(), None);
        assert_eq!(response.map(|v| v * 2).into_result(), Ok(14));
    }

    #[test]
    fn test_error_accessors() {
        let err = ResponseError::new(ResponseErrorKind::Transport, "HTTP 500: boom");
        let response: Response<u32> = Response::Error(err.clone());
        assert!(response.is_error());
        assert_eq!(response.data(), None);
        assert_eq!(response.error(), Some(&err));
        assert_eq!(response.into_result(), Err(err));
    }

    #[test]
    fn test_mapping_error_keeps_raw() {
        let err = ResponseError::mapping(MappingError::malformed("unexpected end"), "<items");
        assert_eq!(err.kind, ResponseErrorKind::MalformedDocument);
        assert_eq!(err.raw.as_deref(), Some("<items"));
        assert_eq!(err.to_string(), "malformed document: unexpected end");
    }

    #[test]
    fn test_from_transport_error() {
        let err = ResponseError::from(Error::http_status(404, "<error>Not Found</error>"));
        assert_eq!(err.kind, ResponseErrorKind::Transport);
        assert_eq!(err.raw.as_deref(), Some("<error>Not Found</error>"));
    }

    #[test]
    fn test_aborted_at_keeps_transport_body() {
        let err = ResponseError::from(Error::http_status(500, "boom")).aborted_at(2);
        assert_eq!(err.kind, ResponseErrorKind::PaginationAborted);
        assert_eq!(err.page, Some(2));
        assert!(err.message.contains("transport error"));
        assert_eq!(err.raw.as_deref(), Some("boom"));
    }

    #[test]
    fn test_from_request_errors() {
        let err = ResponseError::from(Error::construction("sitemap request has no location"));
        assert_eq!(err.kind, ResponseErrorKind::InvalidRequest);
        assert_eq!(err.raw, None);

        let parse = url::Url::parse("not a url").unwrap_err();
        assert_eq!(
            ResponseError::from(Error::from(parse)).kind,
            ResponseErrorKind::InvalidRequest
        );
    }

    #[test]
    fn test_aborted_at_wraps_mapping_failure() {
        let err = ResponseError::mapping(MappingError::schema_mismatch("found <html>"), "<html/>")
            .aborted_at(3);
        assert_eq!(err.kind, ResponseErrorKind::PaginationAborted);
        assert_eq!(err.page, Some(3));
        assert_eq!(err.message, "page 3: schema mismatch: found <html>");
        assert_eq!(err.raw.as_deref(), Some("<html/>"));
    }

    #[test]
    fn test_serializes_with_status_tag() {
        let response: Response<u32> = Response::Success(1);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"status": "success", "body": 1}));
    }
}
