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
                    .table(FanArt::Table)
                    .if_not_exists()
                    .col(pk_auto(FanArt::Id))
                    .col(string(FanArt::ImageUrl))
                    .col(string_len(FanArt::ArtistName, 100).default(""))
                    .col(integer_null(FanArt::ArtistId))
                    .col(text(FanArt::Caption).default(""))
                    .col(string_len(FanArt::Week, 50))
                    .col(
                        timestamp(FanArt::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fan_art_artist_id")
                            .from(FanArt::Table, FanArt::ArtistId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FanArt::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FanArt {
    Table,
    Id,
    ImageUrl,
    ArtistName,
    ArtistId,
    Caption,
    Week,
    CreatedAt,
}
