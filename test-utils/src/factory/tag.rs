//! Tag factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a tag with the given name.
///
/// The slug is the lowercased name with spaces replaced by hyphens, which matches
/// what the application derives for simple names.
pub async fn create_tag_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::tag::Model, DbErr> {
    let name = name.into();
    let slug = name.to_lowercase().replace(' ', "-");

    entity::tag::ActiveModel {
        name: ActiveValue::Set(name),
        slug: ActiveValue::Set(slug),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a tag with a unique default name.
pub async fn create_tag(db: &DatabaseConnection) -> Result<entity::tag::Model, DbErr> {
    create_tag_named(db, format!("tag {}", next_id())).await
}
