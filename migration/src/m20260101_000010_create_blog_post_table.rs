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
                    .table(BlogPost::Table)
                    .if_not_exists()
                    .col(pk_auto(BlogPost::Id))
                    .col(integer(BlogPost::AuthorId))
                    .col(string_len(BlogPost::Title, 200))
                    .col(text(BlogPost::Content))
                    .col(boolean(BlogPost::IsPublic).default(true))
                    .col(
                        timestamp(BlogPost::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(BlogPost::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blog_post_author_id")
                            .from(BlogPost::Table, BlogPost::AuthorId)
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
            .drop_table(Table::drop().table(BlogPost::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BlogPost {
    Table,
    Id,
    AuthorId,
    Title,
    Content,
    IsPublic,
    CreatedAt,
    UpdatedAt,
}
