pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_user_table;
mod m20260101_000002_create_blacklisted_token_table;
mod m20260101_000003_create_team_member_table;
mod m20260101_000004_create_announcement_table;
mod m20260101_000005_create_tag_table;
mod m20260101_000006_create_event_table;
mod m20260101_000007_create_event_tag_table;
mod m20260101_000008_create_fan_art_table;
mod m20260101_000009_create_seasonal_report_table;
mod m20260101_000010_create_blog_post_table;
mod m20260101_000011_create_fan_fiction_table;
mod m20260101_000012_create_fan_fiction_tag_table;
mod m20260101_000013_create_chapter_table;
mod m20260101_000014_create_comment_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_user_table::Migration),
            Box::new(m20260101_000002_create_blacklisted_token_table::Migration),
            Box::new(m20260101_000003_create_team_member_table::Migration),
            Box::new(m20260101_000004_create_announcement_table::Migration),
            Box::new(m20260101_000005_create_tag_table::Migration),
            Box::new(m20260101_000006_create_event_table::Migration),
            Box::new(m20260101_000007_create_event_tag_table::Migration),
            Box::new(m20260101_000008_create_fan_art_table::Migration),
            Box::new(m20260101_000009_create_seasonal_report_table::Migration),
            Box::new(m20260101_000010_create_blog_post_table::Migration),
            Box::new(m20260101_000011_create_fan_fiction_table::Migration),
            Box::new(m20260101_000012_create_fan_fiction_tag_table::Migration),
            Box::new(m20260101_000013_create_chapter_table::Migration),
            Box::new(m20260101_000014_create_comment_table::Migration),
        ]
    }
}
