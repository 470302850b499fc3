use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Announcement::Table)
                    .if_not_exists()
                    .col(pk_auto(Announcement::Id))
                    .col(string_len(Announcement::Title, 200))
                    .col(text(Announcement::Message))
                    .col(boolean(Announcement::IsActive).default(true))
                    .col(integer(Announcement::Priority).default(0))
                    .col(
                        timestamp(Announcement::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Announcement::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Announcement {
    Table,
    Id,
    Title,
    Message,
    IsActive,
    Priority,
    CreatedAt,
}
