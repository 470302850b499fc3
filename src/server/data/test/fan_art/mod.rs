use crate::server::{data::fan_art::FanArtRepository, model::fan_art::CreateFanArtParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;

fn create_param(artist_id: Option<i32>, artist_name: &str) -> CreateFanArtParam {
    CreateFanArtParam {
        image_url: "https://example.com/art.png".to_string(),
        artist_name: artist_name.to_string(),
        artist_id,
        caption: String::new(),
        week: "Week 1".to_string(),
    }
}
