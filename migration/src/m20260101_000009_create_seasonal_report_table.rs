use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SeasonalReport::Table)
                    .if_not_exists()
                    .col(pk_auto(SeasonalReport::Id))
                    .col(string_len(SeasonalReport::Title, 200))
                    .col(string_len(SeasonalReport::Season, 50))
                    .col(text(SeasonalReport::Description))
                    .col(string_null(SeasonalReport::PosterUrl))
                    .col(timestamp(SeasonalReport::PublishedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SeasonalReport::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SeasonalReport {
    Table,
    Id,
    Title,
    Season,
    Description,
    PosterUrl,
    PublishedAt,
}
