use super::common::Ratings;
use crate::types::ThingType;
use chrono::NaiveDateTime;
use serde::Serialize;

/// A user's collection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Collection {
    pub terms_of_use: Option<String>,
    pub total_items: u64,
    pub publish_date: Option<String>,
    pub items: Vec<CollectionItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionItem {
    pub collection_id: u64,
    pub object_id: u64,
    pub object_type: Option<String>,
    pub subtype: ThingType,
    /// Name the user gave the item, the primary name by default
    pub name: String,
    pub original_name: Option<String>,
    pub year_published: Option<i32>,
    pub image: Option<String>,
    pub thumbnail: Option<String>,
    pub status: Option<CollectionStatus>,
    pub num_plays: Option<u32>,
    pub comment: Option<String>,
    pub condition_text: Option<String>,
    pub stats: Option<CollectionStatistics>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CollectionStatus {
    pub own: bool,
    pub prev_owned: bool,
    pub for_trade: bool,
    pub want: bool,
    pub want_to_play: bool,
    pub want_to_buy: bool,
    pub wishlist: bool,
    pub wishlist_priority: Option<u8>,
    pub preordered: bool,
    pub last_modified: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionStatistics {
    pub min_players: Option<u32>,
    pub max_players: Option<u32>,
    pub min_play_time: Option<u32>,
    pub max_play_time: Option<u32>,
    pub playing_time: Option<u32>,
    pub num_owned: Option<u64>,
    pub rating: Option<Ratings>,
}
