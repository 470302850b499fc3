use crate::server::{
    error::{validation::NON_FIELD_ERRORS, AppError},
    model::fan_art::{CreateFanArtParam, UpdateFanArtParam},
    service::fan_art::FanArtService,
};
use entity::prelude::*;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;

fn create_param(artist_id: Option<i32>, artist_name: &str) -> CreateFanArtParam {
    CreateFanArtParam {
        image_url: "https://example.com/art.png".to_string(),
        artist_name: artist_name.to_string(),
        artist_id,
        caption: String::new(),
        week: "Week 3".to_string(),
    }
}

fn update_param(id: i32) -> UpdateFanArtParam {
    UpdateFanArtParam {
        id,
        image_url: None,
        artist_name: None,
        artist_id: None,
        caption: None,
        week: None,
    }
}
