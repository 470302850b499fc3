use crate::server::{
    error::AppError,
    model::chapter::CreateChapterParam,
    service::chapter::ChapterService,
};
use entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod list;

fn create_param(fan_fiction_id: i32, title: &str) -> CreateChapterParam {
    CreateChapterParam {
        fan_fiction_id,
        title: title.to_string(),
        content: "Once upon a time.".to_string(),
    }
}
