use crate::types::{PlayThingType, SubType};
use chrono::NaiveDate;
use serde::Serialize;

/// Logged plays for a user, one page or all pages once merged
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plays {
    pub terms_of_use: Option<String>,
    pub username: Option<String>,
    pub user_id: Option<u64>,
    pub total: u64,
    pub page: u32,
    pub plays: Vec<Play>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Play {
    pub id: u64,
    pub date: Option<NaiveDate>,
    pub quantity: u32,
    pub length_minutes: u32,
    pub incomplete: bool,
    pub no_win_stats: bool,
    pub location: Option<String>,
    pub item: Option<PlayItem>,
    pub comments: Option<String>,
    pub players: Vec<Player>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayItem {
    pub name: String,
    pub object_type: PlayThingType,
    pub object_id: u64,
    pub subtypes: Vec<SubType>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub username: Option<String>,
    pub user_id: Option<u64>,
    pub name: Option<String>,
    pub start_position: Option<String>,
    pub color: Option<String>,
    pub score: Option<String>,
    pub new: bool,
    pub rating: Option<String>,
    pub win: bool,
}
