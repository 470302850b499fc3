use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: i32,
    pub author: i32,
    pub author_username: String,
    pub content: String,
    /// `blog`, `fanfiction` or `chapter`.
    pub parent_type: String,
    pub parent_id: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCommentDto {
    pub content: String,
    pub parent_type: String,
    pub parent_id: i32,
}

/// Only the content of a comment can change; the parent is fixed at creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateCommentDto {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CommentQueryDto {
    /// Applied only together with `parent_id`. Blank values count as absent.
    pub parent_type: Option<String>,
    /// Numeric parent id, kept as text so a blank value can be ignored.
    #[param(value_type = Option<i32>)]
    pub parent_id: Option<String>,
}
