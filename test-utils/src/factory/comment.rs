//! Comment factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a comment by `author_id` on the parent addressed by `parent_type` and `parent_id`.
///
/// `parent_type` is one of `blog`, `fanfiction` or `chapter`. The parent is not checked.
pub async fn create_comment(
    db: &DatabaseConnection,
    author_id: i32,
    parent_type: &str,
    parent_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    entity::comment::ActiveModel {
        author_id: ActiveValue::Set(author_id),
        content: ActiveValue::Set("Great read!".to_string()),
        parent_type: ActiveValue::Set(parent_type.to_string()),
        parent_id: ActiveValue::Set(parent_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
