use crate::server::{
    data::event::EventRepository,
    model::event::{CreateEventParam, UpdateEventParam},
};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;

async fn event_test() -> test_utils::context::TestContext {
    TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .with_table(entity::prelude::Event)
        .with_table(entity::prelude::EventTag)
        .build()
        .await
        .unwrap()
}

fn create_param(title: &str, tag_ids: Vec<i32>) -> CreateEventParam {
    CreateEventParam {
        title: title.to_string(),
        description: "Screening night".to_string(),
        date: NaiveDate::from_ymd_opt(2025, 4, 12).unwrap(),
        poster_url: None,
        tag_ids,
    }
}
