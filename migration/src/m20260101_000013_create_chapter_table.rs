use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000011_create_fan_fiction_table::FanFiction;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Chapter::Table)
                    .if_not_exists()
                    .col(pk_auto(Chapter::Id))
                    .col(integer(Chapter::FanFictionId))
                    .col(integer(Chapter::ChapterNumber))
                    .col(string_len(Chapter::Title, 200))
                    .col(text(Chapter::Content))
                    .col(
                        timestamp(Chapter::PublishedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chapter_fan_fiction_id")
                            .from(Chapter::Table, Chapter::FanFictionId)
                            .to(FanFiction::Table, FanFiction::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_chapter_fan_fiction_id_chapter_number")
                    .table(Chapter::Table)
                    .col(Chapter::FanFictionId)
                    .col(Chapter::ChapterNumber)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Chapter::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Chapter {
    Table,
    Id,
    FanFictionId,
    ChapterNumber,
    Title,
    Content,
    PublishedAt,
}
