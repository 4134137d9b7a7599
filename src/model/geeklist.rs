use super::Timestamp;
use crate::types::SubType;
use serde::Serialize;

/// A user-curated list, served by the legacy API
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeekList {
    pub terms_of_use: Option<String>,
    pub id: u64,
    pub post_date: Option<Timestamp>,
    pub edit_date: Option<Timestamp>,
    pub thumbs: u32,
    pub num_items: u32,
    pub username: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub comments: Vec<GeekListComment>,
    pub items: Vec<GeekListItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeekListComment {
    pub username: Option<String>,
    pub date: Option<Timestamp>,
    pub post_date: Option<Timestamp>,
    pub edit_date: Option<Timestamp>,
    pub thumbs: u32,
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeekListItem {
    pub id: u64,
    pub object_type: Option<String>,
    pub subtype: Option<SubType>,
    pub object_id: u64,
    pub object_name: Option<String>,
    pub username: Option<String>,
    pub post_date: Option<Timestamp>,
    pub edit_date: Option<Timestamp>,
    pub thumbs: u32,
    pub image_id: Option<u64>,
    pub body: Option<String>,
    pub comments: Vec<GeekListComment>,
}
