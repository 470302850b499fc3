use sea_orm_migration::{prelude::*, schema::*};

use super::{m20260101_000005_create_tag_table::Tag, m20260101_000006_create_event_table::Event};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventTag::Table)
                    .if_not_exists()
                    .col(integer(EventTag::EventId))
                    .col(integer(EventTag::TagId))
                    .primary_key(Index::create().col(EventTag::EventId).col(EventTag::TagId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_tag_event_id")
                            .from(EventTag::Table, EventTag::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_tag_tag_id")
                            .from(EventTag::Table, EventTag::TagId)
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
            .drop_table(Table::drop().table(EventTag::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventTag {
    Table,
    EventId,
    TagId,
}
