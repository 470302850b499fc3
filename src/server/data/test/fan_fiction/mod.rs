use crate::{
    model::fan_fiction::FanFictionQueryDto,
    server::{
        data::fan_fiction::FanFictionRepository,
        model::fan_fiction::{FanFictionQuery, FanFictionStatus, UpdateFanFictionParam},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::fan_fiction::FanFictionFactory};

mod search;
mod update;

fn query(search: Option<&str>, limit: Option<u64>, offset: Option<u64>) -> FanFictionQuery {
    FanFictionQuery::from_dto(FanFictionQueryDto {
        search: search.map(str::to_string),
        limit,
        offset,
    })
}
