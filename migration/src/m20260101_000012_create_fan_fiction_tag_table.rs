use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000005_create_tag_table::Tag, m20260101_000011_create_fan_fiction_table::FanFiction,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FanFictionTag::Table)
                    .if_not_exists()
                    .col(integer(FanFictionTag::FanFictionId))
                    .col(integer(FanFictionTag::TagId))
                    .primary_key(
                        Index::create()
                            .col(FanFictionTag::FanFictionId)
                            .col(FanFictionTag::TagId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fan_fiction_tag_fan_fiction_id")
                            .from(FanFictionTag::Table, FanFictionTag::FanFictionId)
                            .to(FanFiction::Table, FanFiction::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fan_fiction_tag_tag_id")
                            .from(FanFictionTag::Table, FanFictionTag::TagId)
                            .to(Tag::Table, Tag::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FanFictionTag::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FanFictionTag {
    Table,
    FanFictionId,
    TagId,
}
