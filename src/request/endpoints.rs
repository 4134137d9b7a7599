//! One constructor per endpoint kind
//!
//! Each constructor accepts only the parameters meaningful for its endpoint
//! and rejects invalid combinations before anything is sent.

use super::types::{EndpointKind, Request};
use crate::error::{Error, Result};
use crate::types::{
    Domain, FamilyType, ForumListType, HotListType, Inclusion, MemberSort, PlayThingType, SubType,
    ThingType,
};
use chrono::{NaiveDate, NaiveDateTime};

const DATE_TIME_PARAM_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_PARAM_FORMAT: &str = "%Y-%m-%d";

/// Valid `pagesize` range for thing comments
pub const THING_PAGE_SIZE_RANGE: std::ops::RangeInclusive<u32> = 10..=100;

// ============================================================================
// Options
// ============================================================================

/// Options for a batch thing lookup
#[derive(Debug, Clone, Default)]
pub struct ThingOptions {
    /// Only return these thing types
    pub types: Vec<ThingType>,
    pub stats: bool,
    pub versions: bool,
    pub videos: bool,
    pub marketplace: bool,
    /// Include comments; excludes `rating_comments`
    pub comments: bool,
    /// Include ratings with comments; excludes `comments`
    pub rating_comments: bool,
    pub page: Option<u32>,
    /// Comments per page, 10 to 100
    pub page_size: Option<u32>,
}

/// Options for a user collection
#[derive(Debug, Clone, Default)]
pub struct CollectionOptions {
    pub subtype: Option<ThingType>,
    pub exclude_subtype: Option<ThingType>,
    /// Restrict to these thing ids
    pub ids: Vec<u64>,
    pub version: bool,
    pub brief: bool,
    pub stats: bool,
    pub own: Option<bool>,
    pub rated: Option<bool>,
    pub played: Option<bool>,
    pub comment: Option<bool>,
    pub trade: Option<bool>,
    pub want: Option<bool>,
    pub wishlist: Option<bool>,
    /// 1 (must have) to 5 (don't buy)
    pub wishlist_priority: Option<u8>,
    pub preordered: Option<bool>,
    pub want_to_play: Option<bool>,
    pub want_to_buy: Option<bool>,
    pub prev_owned: Option<bool>,
    pub has_parts: Option<bool>,
    pub want_parts: Option<bool>,
    pub min_rating: Option<u8>,
    pub rating: Option<u8>,
    pub min_bgg_rating: Option<u8>,
    pub bgg_rating: Option<u8>,
    pub min_plays: Option<u32>,
    pub max_plays: Option<u32>,
    pub collection_id: Option<u64>,
    pub modified_since: Option<NaiveDateTime>,
}

/// Options for a user profile lookup
#[derive(Debug, Clone, Default)]
pub struct UserOptions {
    pub buddies: Option<Inclusion>,
    pub guilds: Option<Inclusion>,
    pub top: Option<Inclusion>,
    pub hot: Option<Inclusion>,
    pub domain: Option<Domain>,
    pub page: Option<u32>,
}

/// Options for a thread lookup
#[derive(Debug, Clone, Default)]
pub struct ThreadOptions {
    pub min_article_id: Option<u64>,
    pub min_article_date: Option<NaiveDateTime>,
    /// Maximum number of articles
    pub count: Option<u32>,
}

/// Options for a guild lookup
#[derive(Debug, Clone, Default)]
pub struct GuildOptions {
    pub members: Option<Inclusion>,
    pub sort: Option<MemberSort>,
    pub page: Option<u32>,
}

/// Options for a search
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub types: Vec<ThingType>,
    pub exact: Option<Inclusion>,
}

/// Options for logged plays
#[derive(Debug, Clone, Default)]
pub struct PlaysOptions {
    /// Only plays of this object
    pub id: Option<u64>,
    pub thing_type: Option<PlayThingType>,
    pub subtype: Option<SubType>,
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
    pub page: Option<u32>,
}

// ============================================================================
// Constructors
// ============================================================================

fn joined<T: std::fmt::Display>(values: &[T]) -> Option<String> {
    if values.is_empty() {
        None
    } else {
        Some(
            values
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(","),
        )
    }
}

fn flag(enabled: bool) -> Option<&'static str> {
    enabled.then_some("1")
}

fn bool_param(value: Option<bool>) -> Option<&'static str> {
    value.map(|v| Inclusion::from(v).to_param())
}

fn inclusion(value: Option<Inclusion>) -> Option<&'static str> {
    value.map(Inclusion::to_param)
}

fn non_blank(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::construction(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}

fn check_page(page: Option<u32>) -> Result<()> {
    if page == Some(0) {
        return Err(Error::construction("page numbers start at 1"));
    }
    Ok(())
}

fn check_range(field: &str, value: Option<u8>, range: std::ops::RangeInclusive<u8>) -> Result<()> {
    match value {
        Some(v) if !range.contains(&v) => Err(Error::construction(format!(
            "{field} must be between {} and {}, got {v}",
            range.start(),
            range.end()
        ))),
        _ => Ok(()),
    }
}

impl Request {
    /// Batch lookup of things by id
    pub fn things(ids: &[u64], options: ThingOptions) -> Result<Self> {
        let Some(id_list) = joined(ids) else {
            return Err(Error::construction("thing lookup needs at least one id"));
        };
        if options.comments && options.rating_comments {
            return Err(Error::construction(
                "comments and rating comments cannot be requested together",
            ));
        }
        if let Some(size) = options.page_size {
            if !THING_PAGE_SIZE_RANGE.contains(&size) {
                return Err(Error::construction(format!(
                    "pagesize must be between 10 and 100, got {size}"
                )));
            }
        }
        check_page(options.page)?;

        Ok(Self::new(EndpointKind::Thing)
            .with_param("id", id_list)
            .with_optional_param("type", joined(&options.types))
            .with_optional_param("stats", flag(options.stats))
            .with_optional_param("versions", flag(options.versions))
            .with_optional_param("videos", flag(options.videos))
            .with_optional_param("marketplace", flag(options.marketplace))
            .with_optional_param("comments", flag(options.comments))
            .with_optional_param("ratingcomments", flag(options.rating_comments))
            .with_optional_param("page", options.page)
            .with_optional_param("pagesize", options.page_size))
    }

    /// A user's collection
    pub fn collection(username: &str, options: CollectionOptions) -> Result<Self> {
        let username = non_blank("username", username)?;
        check_range("wishlist priority", options.wishlist_priority, 1..=5)?;
        check_range("minimum rating", options.min_rating, 1..=10)?;
        check_range("rating", options.rating, 1..=10)?;
        check_range("minimum BGG rating", options.min_bgg_rating, 1..=10)?;
        check_range("BGG rating", options.bgg_rating, 1..=10)?;

        Ok(Self::new(EndpointKind::Collection)
            .with_param("username", username)
            .with_optional_param("subtype", options.subtype)
            .with_optional_param("excludesubtype", options.exclude_subtype)
            .with_optional_param("id", joined(&options.ids))
            .with_optional_param("version", flag(options.version))
            .with_optional_param("brief", flag(options.brief))
            .with_optional_param("stats", flag(options.stats))
            .with_optional_param("own", bool_param(options.own))
            .with_optional_param("rated", bool_param(options.rated))
            .with_optional_param("played", bool_param(options.played))
            .with_optional_param("comment", bool_param(options.comment))
            .with_optional_param("trade", bool_param(options.trade))
            .with_optional_param("want", bool_param(options.want))
            .with_optional_param("wishlist", bool_param(options.wishlist))
            .with_optional_param("wishlistpriority", options.wishlist_priority)
            .with_optional_param("preordered", bool_param(options.preordered))
            .with_optional_param("wanttoplay", bool_param(options.want_to_play))
            .with_optional_param("wanttobuy", bool_param(options.want_to_buy))
            .with_optional_param("prevowned", bool_param(options.prev_owned))
            .with_optional_param("hasparts", bool_param(options.has_parts))
            .with_optional_param("wantparts", bool_param(options.want_parts))
            .with_optional_param("minrating", options.min_rating)
            .with_optional_param("rating", options.rating)
            .with_optional_param("minbggrating", options.min_bgg_rating)
            .with_optional_param("bggrating", options.bgg_rating)
            .with_optional_param("minplays", options.min_plays)
            .with_optional_param("maxplays", options.max_plays)
            .with_optional_param("collid", options.collection_id)
            .with_optional_param(
                "modifiedsince",
                options
                    .modified_since
                    .map(|d| d.format(DATE_TIME_PARAM_FORMAT).to_string()),
            ))
    }

    /// A user profile
    pub fn user(name: &str, options: UserOptions) -> Result<Self> {
        let name = non_blank("user name", name)?;
        check_page(options.page)?;

        Ok(Self::new(EndpointKind::User)
            .with_param("name", name)
            .with_optional_param("buddies", inclusion(options.buddies))
            .with_optional_param("guilds", inclusion(options.guilds))
            .with_optional_param("top", inclusion(options.top))
            .with_optional_param("hot", inclusion(options.hot))
            .with_optional_param("domain", options.domain)
            .with_optional_param("page", options.page))
    }

    /// The threads of a forum
    pub fn forum(id: u64, page: Option<u32>) -> Result<Self> {
        check_page(page)?;
        Ok(Self::new(EndpointKind::Forum)
            .with_param("id", id)
            .with_optional_param("page", page))
    }

    /// The forums attached to a thing or family
    pub fn forum_list(id: u64, list_type: ForumListType) -> Result<Self> {
        Ok(Self::new(EndpointKind::ForumList)
            .with_param("id", id)
            .with_param("type", list_type))
    }

    /// The articles of a thread
    pub fn thread(id: u64, options: ThreadOptions) -> Result<Self> {
        Ok(Self::new(EndpointKind::Thread)
            .with_param("id", id)
            .with_optional_param("minarticleid", options.min_article_id)
            .with_optional_param(
                "minarticledate",
                options
                    .min_article_date
                    .map(|d| d.format(DATE_TIME_PARAM_FORMAT).to_string()),
            )
            .with_optional_param("count", options.count))
    }

    /// A geeklist, served by the legacy API
    pub fn geeklist(id: u64, comments: Option<Inclusion>) -> Result<Self> {
        Ok(Self::new(EndpointKind::GeekList)
            .with_path_id(id)
            .with_optional_param("comments", inclusion(comments)))
    }

    /// A guild
    pub fn guild(id: u64, options: GuildOptions) -> Result<Self> {
        check_page(options.page)?;
        Ok(Self::new(EndpointKind::Guild)
            .with_param("id", id)
            .with_optional_param("members", inclusion(options.members))
            .with_optional_param("sort", options.sort.map(MemberSort::to_param))
            .with_optional_param("page", options.page))
    }

    /// The hot list
    pub fn hot(list_type: Option<HotListType>) -> Result<Self> {
        Ok(Self::new(EndpointKind::Hot).with_optional_param("type", list_type))
    }

    /// Search things by name
    pub fn search(query: &str, options: SearchOptions) -> Result<Self> {
        let query = non_blank("search query", query)?;
        Ok(Self::new(EndpointKind::Search)
            .with_param("query", query)
            .with_optional_param("type", joined(&options.types))
            .with_optional_param("exact", inclusion(options.exact)))
    }

    /// The site-wide sitemap index
    pub fn sitemap_index() -> Result<Self> {
        Ok(Self::new(EndpointKind::SitemapIndex))
    }

    /// One sitemap listed in the sitemap index
    pub fn sitemap(location: &str) -> Result<Self> {
        let location = non_blank("sitemap location", location)?;
        url::Url::parse(&location).map_err(|e| {
            Error::construction(format!("sitemap location '{location}' is not a URL: {e}"))
        })?;
        Ok(Self::new(EndpointKind::Sitemap).with_location(location))
    }

    /// Plays logged by a user
    pub fn plays(username: &str, options: PlaysOptions) -> Result<Self> {
        let username = non_blank("username", username)?;
        check_page(options.page)?;
        if let (Some(min), Some(max)) = (options.min_date, options.max_date) {
            if min > max {
                return Err(Error::construction(format!(
                    "min date {min} is after max date {max}"
                )));
            }
        }

        Ok(Self::new(EndpointKind::Plays)
            .with_param("username", username)
            .with_optional_param("id", options.id)
            .with_optional_param("type", options.thing_type)
            .with_optional_param(
                "mindate",
                options.min_date.map(|d| d.format(DATE_PARAM_FORMAT).to_string()),
            )
            .with_optional_param(
                "maxdate",
                options.max_date.map(|d| d.format(DATE_PARAM_FORMAT).to_string()),
            )
            .with_optional_param("subtype", options.subtype)
            .with_optional_param("page", options.page))
    }

    /// Batch lookup of families by id
    pub fn family(ids: &[u64], types: &[FamilyType]) -> Result<Self> {
        let Some(id_list) = joined(ids) else {
            return Err(Error::construction("family lookup needs at least one id"));
        };
        Ok(Self::new(EndpointKind::Family)
            .with_param("id", id_list)
            .with_optional_param("type", joined(types)))
    }
}
