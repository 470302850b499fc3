use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamMember::Table)
                    .if_not_exists()
                    .col(pk_auto(TeamMember::Id))
                    .col(string_len(TeamMember::Name, 100))
                    .col(string_len(TeamMember::Role, 100))
                    .col(string_len(TeamMember::Tenure, 9))
                    .col(string_null(TeamMember::ImageUrl))
                    .col(string_null(TeamMember::InstituteEmail).unique_key())
                    .col(string_null(TeamMember::InstagramUrl))
                    .col(string_null(TeamMember::LinkedinUrl))
                    .col(boolean(TeamMember::IsActive).default(true))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TeamMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TeamMember {
    Table,
    Id,
    Name,
    Role,
    Tenure,
    ImageUrl,
    InstituteEmail,
    InstagramUrl,
    LinkedinUrl,
    IsActive,
}
