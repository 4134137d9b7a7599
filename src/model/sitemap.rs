use crate::types::SitemapLocationType;
use chrono::NaiveDate;
use serde::Serialize;

/// The site's sitemap index
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapIndex {
    pub sitemaps: Vec<SitemapLocation>,
}

impl SitemapIndex {
    /// Locations whose category is one of `types`; every location when
    /// `types` is empty
    pub fn locations_of<'a>(
        &'a self,
        types: &'a [SitemapLocationType],
    ) -> impl Iterator<Item = &'a SitemapLocation> + 'a {
        self.sitemaps
            .iter()
            .filter(move |loc| types.is_empty() || types.contains(&loc.location_type))
    }
}

/// One entry of the sitemap index
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapLocation {
    pub location: String,
    /// Category inferred from the URL
    pub location_type: SitemapLocationType,
}

/// A sitemap page (`<urlset>`)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sitemap {
    pub urls: Vec<SitemapUrl>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapUrl {
    pub location: String,
    pub change_frequency: Option<String>,
    pub priority: Option<f64>,
    pub last_modified: Option<NaiveDate>,
}
