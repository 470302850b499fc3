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
                    .table(FanFiction::Table)
                    .if_not_exists()
                    .col(pk_auto(FanFiction::Id))
                    .col(integer(FanFiction::AuthorId))
                    .col(string_len_null(FanFiction::FrontPageUrl, 700))
                    .col(string_len(FanFiction::Title, 700))
                    .col(text(FanFiction::Summary))
                    .col(string_len(FanFiction::Status, 20))
                    .col(
                        timestamp(FanFiction::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fan_fiction_author_id")
                            .from(FanFiction::Table, FanFiction::AuthorId)
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
            .drop_table(Table::drop().table(FanFiction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FanFiction {
    Table,
    Id,
    AuthorId,
    FrontPageUrl,
    Title,
    Summary,
    Status,
    CreatedAt,
}
