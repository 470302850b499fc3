//! Fan art domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::fan_art::{CreateFanArtDto, FanArtDto, UpdateFanArtDto},
    server::{
        error::validation::{ValidationErrors, NON_FIELD_ERRORS},
        util::validate::{self, URL_MAX_LENGTH},
    },
};

pub const MISSING_ARTIST: &str = "You must specify either a registered artist or an artist name.";

#[derive(Debug, Clone, PartialEq)]
pub struct FanArt {
    pub id: i32,
    pub image_url: String,
    pub artist_name: String,
    pub artist_id: Option<i32>,
    pub artist_username: Option<String>,
    pub caption: String,
    pub week: String,
    pub created_at: DateTime<Utc>,
}

impl FanArt {
    pub fn into_dto(self) -> FanArtDto {
        FanArtDto {
            id: self.id,
            image_url: self.image_url,
            artist_name: self.artist_name,
            artist: self.artist_id,
            artist_username: self.artist_username,
            caption: self.caption,
            week: self.week,
            created_at: self.created_at,
        }
    }

    /// `artist` is the joined user row, absent when no registered artist is linked.
    pub fn from_entity(entity: entity::fan_art::Model, artist: Option<entity::user::Model>) -> Self {
        Self {
            id: entity.id,
            image_url: entity.image_url,
            artist_name: entity.artist_name,
            artist_id: entity.artist_id,
            artist_username: artist.map(|a| a.username),
            caption: entity.caption,
            week: entity.week,
            created_at: entity.created_at,
        }
    }
}

/// Fails unless a registered artist or a non-blank free-form credit is present.
pub fn check_artist(
    errors: &mut ValidationErrors,
    artist_id: Option<i32>,
    artist_name: &str,
) {
    if artist_id.is_none() && artist_name.trim().is_empty() {
        errors.add(NON_FIELD_ERRORS, MISSING_ARTIST);
    }
}

#[derive(Debug, Clone)]
pub struct CreateFanArtParam {
    pub image_url: String,
    pub artist_name: String,
    pub artist_id: Option<i32>,
    pub caption: String,
    pub week: String,
}

impl CreateFanArtParam {
    pub fn from_dto(dto: CreateFanArtDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        validate::url(&mut errors, "image_url", &dto.image_url, URL_MAX_LENGTH);
        validate::max_length(&mut errors, "artist_name", &dto.artist_name, Some(100));
        validate::text(&mut errors, "week", &dto.week, Some(50));
        if errors.is_empty() {
            check_artist(&mut errors, dto.artist, &dto.artist_name);
        }
        errors.into_result()?;

        Ok(Self {
            image_url: dto.image_url,
            artist_name: dto.artist_name,
            artist_id: dto.artist,
            caption: dto.caption,
            week: dto.week,
        })
    }
}

/// Field checks only; the artist rule is checked against the merged row by the service.
#[derive(Debug, Clone)]
pub struct UpdateFanArtParam {
    pub id: i32,
    pub image_url: Option<String>,
    pub artist_name: Option<String>,
    pub artist_id: Option<Option<i32>>,
    pub caption: Option<String>,
    pub week: Option<String>,
}

impl UpdateFanArtParam {
    pub fn from_dto(id: i32, dto: UpdateFanArtDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(url) = dto.image_url.as_deref() {
            validate::url(&mut errors, "image_url", url, URL_MAX_LENGTH);
        }
        if let Some(name) = dto.artist_name.as_deref() {
            validate::max_length(&mut errors, "artist_name", name, Some(100));
        }
        if let Some(week) = dto.week.as_deref() {
            validate::text(&mut errors, "week", week, Some(50));
        }
        errors.into_result()?;

        Ok(Self {
            id,
            image_url: dto.image_url,
            artist_name: dto.artist_name,
            artist_id: dto.artist,
            caption: dto.caption,
            week: dto.week,
        })
    }
}
