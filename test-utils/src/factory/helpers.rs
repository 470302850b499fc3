//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user together with a fan-fiction they author.
///
/// # Returns
/// - `Ok((user, fan_fiction))` - The created rows
/// - `Err(DbErr)` - Database error during creation
pub async fn create_fan_fiction_with_author(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::fan_fiction::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let fan_fiction = crate::factory::fan_fiction::create_fan_fiction(db, user.id).await?;

    Ok((user, fan_fiction))
}
