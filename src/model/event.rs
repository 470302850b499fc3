use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{api::double_option, tag::TagDto};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub poster_url: Option<String>,
    pub tags: Vec<TagDto>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateEventDto {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub tag_ids: Vec<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateEventDto {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub poster_url: Option<Option<String>>,
    /// Replaces every tag association when present.
    #[serde(default)]
    pub tag_ids: Option<Vec<i32>>,
}
