//! Blog post factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test blog posts owned by `author_id`.
pub struct BlogPostFactory<'a> {
    db: &'a DatabaseConnection,
    author_id: i32,
    title: String,
    content: String,
    is_public: bool,
}

impl<'a> BlogPostFactory<'a> {
    /// Defaults to a public post with generated title and content.
    pub fn new(db: &'a DatabaseConnection, author_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            author_id,
            title: format!("Post {}", id),
            content: format!("Content of post {}", id),
            is_public: true,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }

    pub async fn build(self) -> Result<entity::blog_post::Model, DbErr> {
        let now = Utc::now();
        entity::blog_post::ActiveModel {
            author_id: ActiveValue::Set(self.author_id),
            title: ActiveValue::Set(self.title),
            content: ActiveValue::Set(self.content),
            is_public: ActiveValue::Set(self.is_public),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a public blog post for `author_id`.
pub async fn create_blog_post(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::blog_post::Model, DbErr> {
    BlogPostFactory::new(db, author_id).build().await
}
