//! Request types
//!
//! A [`Request`] is an immutable description of one logical call. Every
//! builder method consumes the value and returns a new one.

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use url::Url;

/// The fixed set of remote query shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointKind {
    Collection,
    Thing,
    User,
    Forum,
    ForumList,
    Thread,
    GeekList,
    Guild,
    Hot,
    Search,
    SitemapIndex,
    Sitemap,
    Plays,
    Family,
}

/// Which base URL an endpoint lives under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiRoot {
    Xml2,
    Xml1,
    Site,
    /// The request carries its own absolute location
    Direct,
}

impl EndpointKind {
    /// Root element every document of this kind starts with
    pub fn root_element(self) -> &'static str {
        match self {
            Self::Collection | Self::Thing | Self::Hot | Self::Search | Self::Family => "items",
            Self::User => "user",
            Self::Forum => "forum",
            Self::ForumList => "forums",
            Self::Thread => "thread",
            Self::GeekList => "geeklist",
            Self::Guild => "guild",
            Self::SitemapIndex => "sitemapindex",
            Self::Sitemap => "urlset",
            Self::Plays => "plays",
        }
    }

    /// Path segment appended to the API root
    pub fn path(self) -> &'static str {
        match self {
            Self::Collection => "collection",
            Self::Thing => "thing",
            Self::User => "user",
            Self::Forum => "forum",
            Self::ForumList => "forumlist",
            Self::Thread => "thread",
            Self::GeekList => "geeklist",
            Self::Guild => "guild",
            Self::Hot => "hot",
            Self::Search => "search",
            Self::SitemapIndex => "sitemapindex",
            Self::Sitemap => "",
            Self::Plays => "plays",
            Self::Family => "family",
        }
    }

    pub fn api_root(self) -> ApiRoot {
        match self {
            Self::GeekList => ApiRoot::Xml1,
            Self::SitemapIndex => ApiRoot::Site,
            Self::Sitemap => ApiRoot::Direct,
            _ => ApiRoot::Xml2,
        }
    }

    /// Fixed number of paginated items the service returns per page
    pub fn page_size(self) -> Option<u32> {
        match self {
            Self::Forum => Some(50),
            Self::Guild => Some(25),
            Self::Plays => Some(100),
            Self::User => Some(1000),
            Self::Thing => Some(DEFAULT_THING_PAGE_SIZE),
            _ => None,
        }
    }
}

impl std::fmt::Display for EndpointKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sitemap => f.write_str("sitemap"),
            other => f.write_str(other.path()),
        }
    }
}

/// Comments per page when a thing request does not set `pagesize`
pub const DEFAULT_THING_PAGE_SIZE: u32 = 100;

/// How many pages a call fetches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaginationMode {
    /// Only the requested page
    #[default]
    None,
    /// At most this many pages
    Pages(u32),
    /// Until the service reports no further pages
    Exhaustive,
}

impl PaginationMode {
    /// Upper bound on pages fetched, if any
    pub fn page_cap(self) -> Option<u32> {
        match self {
            Self::None => Some(1),
            Self::Pages(n) => Some(n),
            Self::Exhaustive => None,
        }
    }

    pub fn is_paginated(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// One logical call against an endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    kind: EndpointKind,
    params: BTreeMap<String, String>,
    path_id: Option<String>,
    location: Option<String>,
    pagination: PaginationMode,
}

impl Request {
    /// Create an empty request for an endpoint
    pub fn new(kind: EndpointKind) -> Self {
        Self {
            kind,
            params: BTreeMap::new(),
            path_id: None,
            location: None,
            pagination: PaginationMode::None,
        }
    }

    /// Set a query parameter
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.insert(key.into(), value.to_string());
        self
    }

    /// Set a query parameter when a value is present
    #[must_use]
    pub fn with_optional_param<V: ToString>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with_param(key, value),
            None => self,
        }
    }

    /// Append an id as a trailing path segment (legacy API style)
    #[must_use]
    pub fn with_path_id(mut self, id: impl ToString) -> Self {
        self.path_id = Some(id.to_string());
        self
    }

    /// Use an absolute location instead of an API root
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the pagination mode
    #[must_use]
    pub fn with_pagination(mut self, mode: PaginationMode) -> Self {
        self.pagination = mode;
        self
    }

    /// Copy of this request targeting another page
    pub fn for_page(&self, page: u32) -> Request {
        self.clone().with_param("page", page)
    }

    pub fn kind(&self) -> EndpointKind {
        self.kind
    }

    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn pagination(&self) -> PaginationMode {
        self.pagination
    }

    /// Page the call starts from
    pub fn start_page(&self) -> u32 {
        self.param("page")
            .and_then(|p| p.parse().ok())
            .unwrap_or(1)
    }

    /// Paginated items per page for this request
    pub fn page_size(&self) -> Option<u32> {
        match self.kind {
            EndpointKind::Thing => Some(
                self.param("pagesize")
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(DEFAULT_THING_PAGE_SIZE),
            ),
            kind => kind.page_size(),
        }
    }

    fn is_included(&self, key: &str) -> bool {
        self.param(key) == Some("1")
    }

    /// Check that the service would actually page this request
    pub fn check_paginable(&self) -> Result<()> {
        match self.kind {
            EndpointKind::Forum | EndpointKind::Plays => Ok(()),
            EndpointKind::User if self.is_included("buddies") || self.is_included("guilds") => {
                Ok(())
            }
            EndpointKind::User => Err(Error::construction(
                "user pagination needs buddies or guilds included",
            )),
            EndpointKind::Guild if self.is_included("members") => Ok(()),
            EndpointKind::Guild => Err(Error::construction(
                "guild pagination needs members included",
            )),
            EndpointKind::Thing
                if self.is_included("comments") || self.is_included("ratingcomments") =>
            {
                Ok(())
            }
            EndpointKind::Thing => Err(Error::construction(
                "thing pagination needs comments or rating comments",
            )),
            kind => Err(Error::construction(format!("{kind} does not paginate"))),
        }
    }

    /// Resolve the fully formed URL for this request
    pub fn url(&self, config: &ClientConfig) -> Result<String> {
        let base = match self.kind.api_root() {
            ApiRoot::Xml2 => &config.xml2_base_url,
            ApiRoot::Xml1 => &config.xml1_base_url,
            ApiRoot::Site => &config.site_base_url,
            ApiRoot::Direct => {
                let location = self.location.as_deref().ok_or_else(|| {
                    Error::construction(format!("{} request has no location", self.kind))
                })?;
                return Ok(Url::parse(location)?.to_string());
            }
        };

        let mut url = Url::parse(base)?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| Error::config(format!("'{base}' cannot be used as a base URL")))?;
            segments.pop_if_empty().push(self.kind.path());
            if let Some(id) = &self.path_id {
                segments.push(id);
            }
        }
        if !self.params.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.params);
        }
        Ok(url.to_string())
    }
}
