//! Announcement factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test announcements.
pub struct AnnouncementFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    is_active: bool,
    priority: i32,
}

impl<'a> AnnouncementFactory<'a> {
    /// Defaults to an active announcement with priority 0.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            title: format!("Announcement {}", next_id()),
            is_active: true,
            priority: 0,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub async fn build(self) -> Result<entity::announcement::Model, DbErr> {
        entity::announcement::ActiveModel {
            title: ActiveValue::Set(self.title),
            message: ActiveValue::Set("Meeting in the club room.".to_string()),
            is_active: ActiveValue::Set(self.is_active),
            priority: ActiveValue::Set(self.priority),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active announcement with default values.
pub async fn create_announcement(
    db: &DatabaseConnection,
) -> Result<entity::announcement::Model, DbErr> {
    AnnouncementFactory::new(db).build().await
}
