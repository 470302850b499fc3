use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::double_option;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FanArtDto {
    pub id: i32,
    pub image_url: String,
    pub artist_name: String,
    /// Id of the registered artist, if any.
    pub artist: Option<i32>,
    pub artist_username: Option<String>,
    pub caption: String,
    pub week: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateFanArtDto {
    pub image_url: String,
    #[serde(default)]
    pub artist_name: String,
    #[serde(default)]
    pub artist: Option<i32>,
    #[serde(default)]
    pub caption: String,
    pub week: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateFanArtDto {
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub artist_name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i32>)]
    pub artist: Option<Option<i32>>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub week: Option<String>,
}
