use crate::server::{
    error::AppError,
    model::fan_fiction::{CreateFanFictionParam, FanFictionStatus, UpdateFanFictionParam},
    service::fan_fiction::FanFictionService,
};
use entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
