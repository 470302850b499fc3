use crate::server::{
    error::AppError,
    model::tag::{CreateTagParam, UpdateTagParam},
    service::tag::{check_tag_ids, TagService},
};
use test_utils::{builder::TestBuilder, factory};

mod check_tag_ids;
mod map_write_error;
mod create;
mod update;

fn create_param(name: &str, slug: Option<&str>) -> CreateTagParam {
    CreateTagParam {
        name: name.to_string(),
        slug: slug.map(str::to_string),
    }
}
