//! Hot list, search results and families

use super::common::{Link, Name};
use crate::types::{FamilyType, ThingType};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotList {
    pub terms_of_use: Option<String>,
    pub items: Vec<HotListItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotListItem {
    pub id: u64,
    pub rank: u32,
    pub name: Option<String>,
    pub thumbnail: Option<String>,
    pub year_published: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults {
    pub terms_of_use: Option<String>,
    pub total: u64,
    pub items: Vec<SearchResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub id: u64,
    pub result_type: ThingType,
    pub name: Name,
    pub year_published: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Family {
    pub terms_of_use: Option<String>,
    pub items: Vec<FamilyItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FamilyItem {
    pub id: u64,
    pub family_type: FamilyType,
    /// Value of the primary name
    pub name: Option<String>,
    pub names: Vec<Name>,
    pub thumbnail: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub links: Vec<Link>,
}
