//! Fan-fiction factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test fan-fiction owned by `author_id`.
///
/// # Example
///
/// ```rust,ignore
/// let story = FanFictionFactory::new(&db, author.id)
///     .title("Wings of Freedom")
///     .tags(vec![tag.id])
///     .build()
///     .await?;
/// ```
pub struct FanFictionFactory<'a> {
    db: &'a DatabaseConnection,
    author_id: i32,
    title: String,
    summary: String,
    status: String,
    tag_ids: Vec<i32>,
}

impl<'a> FanFictionFactory<'a> {
    /// Defaults to an `ongoing` story with no tags.
    pub fn new(db: &'a DatabaseConnection, author_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            author_id,
            title: format!("Story {}", id),
            summary: format!("Summary of story {}", id),
            status: "ongoing".to_string(),
            tag_ids: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Links the story to existing tags.
    pub fn tags(mut self, tag_ids: Vec<i32>) -> Self {
        self.tag_ids = tag_ids;
        self
    }

    pub async fn build(self) -> Result<entity::fan_fiction::Model, DbErr> {
        let story = entity::fan_fiction::ActiveModel {
            author_id: ActiveValue::Set(self.author_id),
            front_page_url: ActiveValue::Set(None),
            title: ActiveValue::Set(self.title),
            summary: ActiveValue::Set(self.summary),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for tag_id in self.tag_ids {
            entity::fan_fiction_tag::ActiveModel {
                fan_fiction_id: ActiveValue::Set(story.id),
                tag_id: ActiveValue::Set(tag_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(story)
    }
}

/// Creates an untagged fan-fiction for `author_id`.
pub async fn create_fan_fiction(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::fan_fiction::Model, DbErr> {
    FanFictionFactory::new(db, author_id).build().await
}
