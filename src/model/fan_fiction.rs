use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::{api::double_option, tag::TagDto};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FanFictionDto {
    pub id: i32,
    pub author: i32,
    pub author_username: String,
    pub front_page_url: Option<String>,
    pub title: String,
    pub summary: String,
    /// `ongoing` or `completed`.
    pub status: String,
    pub tags: Vec<TagDto>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateFanFictionDto {
    pub title: String,
    pub summary: String,
    pub status: String,
    #[serde(default)]
    pub front_page_url: Option<String>,
    #[serde(default)]
    pub tag_ids: Vec<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateFanFictionDto {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// An empty string clears the link.
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub front_page_url: Option<Option<String>>,
    #[serde(default)]
    pub tag_ids: Option<Vec<i32>>,
}

/// Limit/offset page of fan-fiction.
///
/// `next` and `previous` are request-relative links, or null at either end.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedFanFictionDto {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<FanFictionDto>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FanFictionQueryDto {
    /// Whitespace or comma separated terms matched against title, summary and tag names.
    pub search: Option<String>,
    /// Page size, default 10, at most 20.
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}
