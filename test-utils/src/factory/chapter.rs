//! Chapter factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates chapter `chapter_number` of the given fan-fiction.
///
/// The number is taken as given; numbering rules are enforced by the application.
pub async fn create_chapter(
    db: &DatabaseConnection,
    fan_fiction_id: i32,
    chapter_number: i32,
) -> Result<entity::chapter::Model, DbErr> {
    entity::chapter::ActiveModel {
        fan_fiction_id: ActiveValue::Set(fan_fiction_id),
        chapter_number: ActiveValue::Set(chapter_number),
        title: ActiveValue::Set(format!("Chapter {}", chapter_number)),
        content: ActiveValue::Set("It was a dark and stormy night.".to_string()),
        published_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
