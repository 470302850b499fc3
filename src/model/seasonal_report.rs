use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::double_option;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SeasonalReportDto {
    pub id: i32,
    pub title: String,
    pub season: String,
    pub description: String,
    pub poster_url: Option<String>,
    pub published_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateSeasonalReportDto {
    pub title: String,
    pub season: String,
    pub description: String,
    #[serde(default)]
    pub poster_url: Option<String>,
    pub published_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateSeasonalReportDto {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub poster_url: Option<Option<String>>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}
