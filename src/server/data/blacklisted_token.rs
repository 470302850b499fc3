//! Revoked refresh-token identifiers.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};

pub struct BlacklistedTokenRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BlacklistedTokenRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records `jti` as revoked until `expires_at`.
    ///
    /// Blacklisting the same `jti` twice fails with a unique constraint violation.
    pub async fn insert(
        &self,
        jti: &str,
        user_id: i32,
        expires_at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::blacklisted_token::ActiveModel {
            jti: ActiveValue::Set(jti.to_string()),
            user_id: ActiveValue::Set(user_id),
            expires_at: ActiveValue::Set(expires_at),
            blacklisted_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    pub async fn is_blacklisted(&self, jti: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::BlacklistedToken::find()
            .filter(entity::blacklisted_token::Column::Jti.eq(jti))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes rows whose token would have expired anyway by `now`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of purged rows
    pub async fn purge_expired(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::BlacklistedToken::delete_many()
            .filter(entity::blacklisted_token::Column::ExpiresAt.lte(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
