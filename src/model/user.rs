use crate::types::Domain;
use chrono::NaiveDate;
use serde::Serialize;

/// A user profile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub terms_of_use: Option<String>,
    /// Absent when the user does not exist
    pub id: Option<u64>,
    pub name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// URL or `N/A`
    pub avatar_link: Option<String>,
    pub year_registered: Option<i32>,
    pub last_login: Option<NaiveDate>,
    pub state_or_province: Option<String>,
    pub country: Option<String>,
    pub web_address: Option<String>,
    pub xbox_account: Option<String>,
    pub wii_account: Option<String>,
    pub psn_account: Option<String>,
    pub battle_net_account: Option<String>,
    pub steam_account: Option<String>,
    pub trade_rating: Option<i32>,
    pub buddies: Option<Buddies>,
    pub guilds: Option<UserGuilds>,
    pub top: Option<UserList>,
    pub hot: Option<UserList>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Buddies {
    pub total: u64,
    pub page: u32,
    pub buddies: Vec<Buddy>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Buddy {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserGuilds {
    pub total: u64,
    pub page: u32,
    pub guilds: Vec<GuildReference>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuildReference {
    pub id: u64,
    pub name: String,
}

/// A user's top or hot list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserList {
    pub domain: Option<Domain>,
    pub items: Vec<UserListItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserListItem {
    pub rank: u32,
    pub item_type: Option<String>,
    pub id: u64,
    pub name: String,
}
