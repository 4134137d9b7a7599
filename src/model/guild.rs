use super::Timestamp;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Guild {
    pub terms_of_use: Option<String>,
    pub id: u64,
    pub name: String,
    pub created: Option<Timestamp>,
    pub category: Option<String>,
    pub website: Option<String>,
    pub manager: Option<String>,
    pub description: Option<String>,
    pub location: Option<Location>,
    /// Present only when members were requested
    pub members: Option<GuildMembers>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Location {
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state_or_province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuildMembers {
    pub count: u64,
    pub page: u32,
    pub members: Vec<GuildMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuildMember {
    pub name: String,
    pub join_date: Option<Timestamp>,
}
