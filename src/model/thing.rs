use super::common::{Link, Name, Ratings};
use super::Timestamp;
use crate::types::ThingType;
use chrono::NaiveDate;
use serde::Serialize;

/// Result of a batch thing lookup
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Things {
    pub terms_of_use: Option<String>,
    pub things: Vec<Thing>,
}

/// A board game, expansion, accessory, video game or RPG item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Thing {
    pub id: u64,
    pub thing_type: Option<ThingType>,
    /// Value of the primary name
    pub name: Option<String>,
    pub names: Vec<Name>,
    pub thumbnail: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub year_published: Option<i32>,
    pub date_published: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub min_players: Option<u32>,
    pub max_players: Option<u32>,
    pub playing_time: Option<u32>,
    pub min_play_time: Option<u32>,
    pub max_play_time: Option<u32>,
    pub min_age: Option<u32>,
    pub series_code: Option<String>,
    pub issue_index: Option<u32>,
    pub polls: Vec<Poll>,
    pub poll_summaries: Vec<PollSummary>,
    pub links: Vec<Link>,
    pub videos: Vec<Video>,
    pub versions: Vec<Version>,
    pub comments: Option<Comments>,
    pub statistics: Option<Statistics>,
    pub listings: Vec<MarketplaceListing>,
}

/// Community poll. `name` identifies the poll (`suggested_numplayers`,
/// `suggested_playerage`, `language_dependence`, ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Poll {
    pub name: String,
    pub title: Option<String>,
    pub total_votes: u32,
    pub results: Vec<PollResults>,
}

/// Results group; player-count polls have one group per player count
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PollResults {
    pub num_players: Option<String>,
    pub results: Vec<PollResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PollResult {
    pub value: String,
    pub num_votes: u32,
    pub level: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PollSummary {
    pub name: Option<String>,
    pub title: Option<String>,
    pub results: Vec<PollSummaryResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PollSummaryResult {
    pub name: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Video {
    pub id: u64,
    pub title: Option<String>,
    pub category: Option<String>,
    pub language: Option<String>,
    pub link: Option<String>,
    pub username: Option<String>,
    pub user_id: Option<u64>,
    pub post_date: Option<Timestamp>,
}

/// A published version (edition, language, printing) of a thing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Version {
    pub id: u64,
    pub version_type: Option<String>,
    pub name: Option<String>,
    pub names: Vec<Name>,
    pub thumbnail: Option<String>,
    pub image: Option<String>,
    pub year_published: Option<i32>,
    pub release_date: Option<NaiveDate>,
    pub product_code: Option<String>,
    pub width: Option<f64>,
    pub length: Option<f64>,
    pub depth: Option<f64>,
    pub weight: Option<f64>,
    pub links: Vec<Link>,
}

/// One page worth of comments, or all pages once merged
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comments {
    pub page: u32,
    pub total_items: u64,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
    pub username: String,
    pub rating: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub page: Option<u32>,
    pub ratings: Ratings,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketplaceListing {
    pub list_date: Option<Timestamp>,
    pub price: Option<Price>,
    pub condition: Option<String>,
    pub notes: Option<String>,
    pub link: Option<WebLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Price {
    pub value: f64,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebLink {
    pub href: String,
    pub title: Option<String>,
}
