//! XML to domain record mapping
//!
//! # Overview
//!
//! The mapper turns one raw response body into one typed record. It is a
//! pure function of `(endpoint kind, body, enum policy)`: no I/O, no shared
//! state, so the same input always maps to the same output.
//!
//! Failures are categorized by [`MappingErrorKind`](crate::error::MappingErrorKind):
//! - body is not XML: `MalformedDocument`
//! - root element belongs to another endpoint: `SchemaMismatch`
//! - required attribute or element absent: `MissingField`
//! - value not coercible: `TypeMismatch`
//! - unrecognized enum value under the strict policy: `UnknownEnumValue`

mod catalog;
mod collection;
mod community;
mod sitemap;
mod xml;

pub use xml::{parse_enum, Element};

use crate::config::EnumPolicy;
use crate::error::MappingError;
use crate::request::EndpointKind;
use roxmltree::Document;
use tracing::trace;

/// Records that can be built from a document root
pub trait FromXml: Sized {
    /// Build the record from the root element, whose name has already been
    /// checked against the endpoint
    fn from_xml(root: Element<'_, '_>) -> Result<Self, MappingError>;
}

/// Document mapper
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mapper {
    policy: EnumPolicy,
}

impl Mapper {
    pub fn new(policy: EnumPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> EnumPolicy {
        self.policy
    }

    /// Map a raw body produced by an endpoint of `kind`
    pub fn map<T: FromXml>(&self, kind: EndpointKind, raw: &str) -> Result<T, MappingError> {
        let doc = Document::parse(raw).map_err(|e| MappingError::malformed(e.to_string()))?;
        let root = doc.root_element();
        let found = root.tag_name().name();
        let expected = kind.root_element();

        if found != expected {
            let root = Element::new(root, self.policy);
            return Err(match service_error_message(root) {
                Some(message) => {
                    MappingError::schema_mismatch(format!("service returned an error: {message}"))
                }
                None => MappingError::schema_mismatch(format!(
                    "expected <{expected}> for {kind}, found <{found}>"
                )),
            });
        }

        trace!(kind = %kind, bytes = raw.len(), "Mapping document");
        T::from_xml(Element::new(root, self.policy))
    }
}

/// Message carried by an error document: `<errors><error><message>` or
/// `<error message="...">`
fn service_error_message(root: Element<'_, '_>) -> Option<String> {
    match root.name() {
        "errors" => root
            .child("error")
            .and_then(|e| e.child_text("message").or_else(|| e.text())),
        "error" => root
            .opt_str("message")
            .or_else(|| root.child_text("message")),
        _ => None,
    }
}

#[cfg(test)]
mod tests;
