//! Sitemap index and sitemap pages (sitemaps.org schema)

use super::xml::Element;
use super::FromXml;
use crate::error::MappingError;
use crate::model::{Sitemap, SitemapIndex, SitemapLocation, SitemapUrl};
use crate::types::SitemapLocationType;

type Result<T> = std::result::Result<T, MappingError>;

impl FromXml for SitemapIndex {
    fn from_xml(root: Element<'_, '_>) -> Result<Self> {
        Ok(Self {
            sitemaps: root.collect("sitemap", |el| {
                let location = el
                    .child_text("loc")
                    .ok_or_else(|| MappingError::missing_field("sitemap", "loc"))?;
                Ok(SitemapLocation {
                    location_type: SitemapLocationType::from_url(&location),
                    location,
                })
            })?,
        })
    }
}

impl FromXml for Sitemap {
    fn from_xml(root: Element<'_, '_>) -> Result<Self> {
        Ok(Self {
            urls: root.collect("url", |el| {
                Ok(SitemapUrl {
                    location: el
                        .child_text("loc")
                        .ok_or_else(|| MappingError::missing_field("url", "loc"))?,
                    change_frequency: el.child_text("changefreq"),
                    priority: el.child_text_num("priority")?,
                    last_modified: last_modified(el)?,
                })
            })?,
        })
    }
}

/// `<lastmod>` is either a date or a full W3C timestamp; only the date is kept
fn last_modified(el: Element<'_, '_>) -> Result<Option<chrono::NaiveDate>> {
    let Some(raw) = el.child_text("lastmod") else {
        return Ok(None);
    };
    let date_part = raw.get(..10).unwrap_or(&raw);
    chrono::NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| MappingError::type_mismatch("lastmod", &raw, "a YYYY-MM-DD date"))
}
