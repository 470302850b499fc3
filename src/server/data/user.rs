//! User data repository for database operations.
//!
//! Converts between SeaORM user rows and the `User` domain model. Password hashes
//! only leave this module through `UserCredentials`, which the login flow consumes.

use crate::server::model::user::{User, UserCredentials};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

/// Row values for a new account. `password_hash` must already be an Argon2 PHC string.
pub struct CreateUserRecord {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub is_staff: bool,
}

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new account.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on `username`
    pub async fn create(&self, record: CreateUserRecord) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(record.username),
            email: ActiveValue::Set(record.email),
            password_hash: ActiveValue::Set(record.password_hash),
            is_staff: ActiveValue::Set(record.is_staff),
            date_joined: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds the account and its password hash for a login attempt.
    pub async fn find_credentials(&self, username: &str) -> Result<Option<UserCredentials>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(|e| {
            let password_hash = e.password_hash.clone();
            UserCredentials {
                user: User::from_entity(e),
                password_hash,
            }
        }))
    }

    pub async fn username_exists(&self, username: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether at least one staff account exists.
    ///
    /// Used at startup to decide whether the bootstrap admin must be created.
    pub async fn staff_exists(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::IsStaff.eq(true))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
