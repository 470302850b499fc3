use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlacklistedToken::Table)
                    .if_not_exists()
                    .col(pk_auto(BlacklistedToken::Id))
                    .col(string_uniq(BlacklistedToken::Jti))
                    .col(integer(BlacklistedToken::UserId))
                    .col(timestamp(BlacklistedToken::ExpiresAt))
                    .col(
                        timestamp(BlacklistedToken::BlacklistedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blacklisted_token_user_id")
                            .from(BlacklistedToken::Table, BlacklistedToken::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BlacklistedToken::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BlacklistedToken {
    Table,
    Id,
    Jti,
    UserId,
    ExpiresAt,
    BlacklistedAt,
}
