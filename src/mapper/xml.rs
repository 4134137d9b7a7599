//! Typed accessors over a `roxmltree` node
//!
//! Attribute conventions used by the service:
//! - an absent or empty attribute is "not reported"
//! - many scalar children are value-wrapped: `<yearpublished value="2017"/>`
//! - flags are `0`/`1`

use crate::config::EnumPolicy;
use crate::error::MappingError;
use crate::types::OpenEnum;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use roxmltree::Node;
use std::str::FromStr;

type Result<T> = std::result::Result<T, MappingError>;

const NAIVE_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const NAIVE_DATE_FORMAT: &str = "%Y-%m-%d";

/// An element plus the enum policy in force for the document
#[derive(Clone, Copy)]
pub struct Element<'a, 'input> {
    node: Node<'a, 'input>,
    policy: EnumPolicy,
}

impl<'a, 'input> Element<'a, 'input> {
    pub(crate) fn new(node: Node<'a, 'input>, policy: EnumPolicy) -> Self {
        Self { node, policy }
    }

    /// Local tag name
    pub fn name(&self) -> &'a str {
        self.node.tag_name().name()
    }

    pub fn policy(&self) -> EnumPolicy {
        self.policy
    }

    fn field(&self, attr: &str) -> String {
        format!("{}@{attr}", self.name())
    }

    // ------------------------------------------------------------------------
    // Attributes
    // ------------------------------------------------------------------------

    /// Trimmed attribute value; empty counts as absent
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.node
            .attribute(name)
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }

    pub fn opt_str(&self, name: &str) -> Option<String> {
        self.attr(name).map(str::to_string)
    }

    /// Attribute that must be present; an empty value is accepted
    pub fn req_str(&self, name: &str) -> Result<String> {
        self.node
            .attribute(name)
            .map(|v| v.trim().to_string())
            .ok_or_else(|| MappingError::missing_field(self.name(), name))
    }

    pub fn opt_num<T: FromStr>(&self, name: &str) -> Result<Option<T>> {
        self.opt_parsed(name, std::any::type_name::<T>(), |raw| raw.parse().ok())
    }

    pub fn req_num<T: FromStr>(&self, name: &str) -> Result<T> {
        self.opt_num(name)?
            .ok_or_else(|| MappingError::missing_field(self.name(), name))
    }

    /// Integer attribute defaulting to zero when not reported
    pub fn num_or_zero<T: FromStr + Default>(&self, name: &str) -> Result<T> {
        Ok(self.opt_num(name)?.unwrap_or_default())
    }

    /// `0`/`1` flag; absent means false
    pub fn flag(&self, name: &str) -> Result<bool> {
        match self.attr(name) {
            None | Some("0") | Some("false") => Ok(false),
            Some("1") | Some("true") => Ok(true),
            Some(other) => Err(MappingError::type_mismatch(
                &self.field(name),
                other,
                "a 0/1 flag",
            )),
        }
    }

    pub fn opt_enum<E: OpenEnum>(&self, name: &str) -> Result<Option<E>> {
        self.attr(name)
            .map(|raw| parse_enum(self.policy, &self.field(name), raw))
            .transpose()
    }

    pub fn req_enum<E: OpenEnum>(&self, name: &str) -> Result<E> {
        self.opt_enum(name)?
            .ok_or_else(|| MappingError::missing_field(self.name(), name))
    }

    /// RFC 2822 timestamp (`Sat, 19 Aug 2023 13:22:48 +0000`)
    pub fn opt_rfc2822(&self, name: &str) -> Result<Option<DateTime<FixedOffset>>> {
        self.opt_parsed(name, "an RFC 2822 timestamp", parse_rfc2822)
    }

    /// RFC 3339 timestamp (`2016-03-24T09:22:04-05:00`)
    pub fn opt_rfc3339(&self, name: &str) -> Result<Option<DateTime<FixedOffset>>> {
        self.opt_parsed(name, "an RFC 3339 timestamp", |raw| {
            DateTime::parse_from_rfc3339(raw).ok()
        })
    }

    /// Calendar date (`2024-03-01`)
    pub fn opt_date(&self, name: &str) -> Result<Option<NaiveDate>> {
        self.opt_parsed(name, "a YYYY-MM-DD date", parse_naive_date)
    }

    /// Local timestamp without offset (`2024-03-01 18:04:11`)
    pub fn opt_naive_datetime(&self, name: &str) -> Result<Option<NaiveDateTime>> {
        self.opt_parsed(name, "a YYYY-MM-DD HH:MM:SS timestamp", |raw| {
            NaiveDateTime::parse_from_str(raw, NAIVE_DATETIME_FORMAT).ok()
        })
    }

    fn opt_parsed<T>(
        &self,
        name: &str,
        expected: &str,
        parse: impl FnOnce(&str) -> Option<T>,
    ) -> Result<Option<T>> {
        match self.attr(name) {
            None => Ok(None),
            Some(raw) => parse(raw)
                .map(Some)
                .ok_or_else(|| MappingError::type_mismatch(&self.field(name), raw, expected)),
        }
    }

    // ------------------------------------------------------------------------
    // Children
    // ------------------------------------------------------------------------

    pub fn child(&self, name: &str) -> Option<Element<'a, 'input>> {
        self.children(name).next()
    }

    pub fn req_child(&self, name: &str) -> Result<Element<'a, 'input>> {
        self.child(name)
            .ok_or_else(|| MappingError::missing_field(self.name(), name))
    }

    pub fn children<'n>(&self, name: &'n str) -> impl Iterator<Item = Element<'a, 'input>> + 'n
    where
        'a: 'n,
        'input: 'n,
    {
        let policy = self.policy;
        self.node
            .children()
            .filter(move |n| n.is_element() && n.tag_name().name() == name)
            .map(move |node| Element { node, policy })
    }

    /// Map every child named `name`
    pub fn collect<T>(
        &self,
        name: &str,
        map: impl Fn(Element<'a, 'input>) -> Result<T>,
    ) -> Result<Vec<T>> {
        self.children(name).map(map).collect()
    }

    /// Map every `item` child of the wrapper `wrapper`, or nothing when the
    /// wrapper is absent
    pub fn collect_in<T>(
        &self,
        wrapper: &str,
        item: &str,
        map: impl Fn(Element<'a, 'input>) -> Result<T>,
    ) -> Result<Vec<T>> {
        match self.child(wrapper) {
            Some(el) => el.collect(item, map),
            None => Ok(Vec::new()),
        }
    }

    /// Text content including descendants, trimmed; empty counts as absent
    pub fn text(&self) -> Option<String> {
        let text: String = self
            .node
            .descendants()
            .filter(|n| n.is_text())
            .filter_map(|n| n.text())
            .collect();
        let trimmed = text.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    pub fn child_text(&self, name: &str) -> Option<String> {
        self.child(name).and_then(|c| c.text())
    }

    pub fn child_text_num<T: FromStr>(&self, name: &str) -> Result<Option<T>> {
        self.child_text_parsed(name, std::any::type_name::<T>(), |raw| raw.parse().ok())
    }

    pub fn child_text_rfc2822(&self, name: &str) -> Result<Option<DateTime<FixedOffset>>> {
        self.child_text_parsed(name, "an RFC 2822 timestamp", parse_rfc2822)
    }

    fn child_text_parsed<T>(
        &self,
        name: &str,
        expected: &str,
        parse: impl FnOnce(&str) -> Option<T>,
    ) -> Result<Option<T>> {
        match self.child_text(name) {
            None => Ok(None),
            Some(raw) => parse(&raw)
                .map(Some)
                .ok_or_else(|| MappingError::type_mismatch(name, &raw, expected)),
        }
    }

    // Value-wrapped children: <name value="..."/>

    pub fn value_str(&self, name: &str) -> Option<String> {
        self.child(name).and_then(|c| c.opt_str("value"))
    }

    pub fn value_num<T: FromStr>(&self, name: &str) -> Result<Option<T>> {
        match self.child(name) {
            Some(c) => c.opt_num("value"),
            None => Ok(None),
        }
    }

    pub fn value_date(&self, name: &str) -> Result<Option<NaiveDate>> {
        match self.child(name) {
            Some(c) => c.opt_date("value"),
            None => Ok(None),
        }
    }

    pub fn value_rfc2822(&self, name: &str) -> Result<Option<DateTime<FixedOffset>>> {
        match self.child(name) {
            Some(c) => c.opt_rfc2822("value"),
            None => Ok(None),
        }
    }

    pub fn value_rfc3339(&self, name: &str) -> Result<Option<DateTime<FixedOffset>>> {
        match self.child(name) {
            Some(c) => c.opt_rfc3339("value"),
            None => Ok(None),
        }
    }
}

fn parse_rfc2822(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc2822(raw).ok()
}

fn parse_naive_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, NAIVE_DATE_FORMAT).ok()
}

/// Parse an enumeration value under the given policy
pub fn parse_enum<E: OpenEnum>(policy: EnumPolicy, field: &str, raw: &str) -> Result<E> {
    let value = E::from_param(raw);
    if value.is_unknown() && policy == EnumPolicy::Strict {
        return Err(MappingError::unknown_enum(field, raw));
    }
    Ok(value)
}
