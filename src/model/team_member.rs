use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::double_option;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamMemberDto {
    pub id: i32,
    pub name: String,
    pub role: String,
    pub tenure: String,
    pub image_url: Option<String>,
    pub institute_email: Option<String>,
    pub instagram_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTeamMemberDto {
    pub name: String,
    pub role: String,
    pub tenure: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub institute_email: Option<String>,
    #[serde(default)]
    pub instagram_url: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateTeamMemberDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub tenure: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub image_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub institute_email: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub instagram_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub linkedin_url: Option<Option<String>>,
    #[serde(default)]
    pub is_active: Option<bool>,
}
