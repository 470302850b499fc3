use chrono::{DateTime, Utc};

use crate::{
    model::seasonal_report::{
        CreateSeasonalReportDto, SeasonalReportDto, UpdateSeasonalReportDto,
    },
    server::{
        error::validation::ValidationErrors,
        model::team_member::blank_to_none,
        util::validate::{self, URL_MAX_LENGTH},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalReport {
    pub id: i32,
    pub title: String,
    pub season: String,
    pub description: String,
    pub poster_url: Option<String>,
    pub published_at: DateTime<Utc>,
}

impl SeasonalReport {
    pub fn into_dto(self) -> SeasonalReportDto {
        SeasonalReportDto {
            id: self.id,
            title: self.title,
            season: self.season,
            description: self.description,
            poster_url: self.poster_url,
            published_at: self.published_at,
        }
    }

    pub fn from_entity(entity: entity::seasonal_report::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            season: entity.season,
            description: entity.description,
            poster_url: entity.poster_url,
            published_at: entity.published_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateSeasonalReportParam {
    pub title: String,
    pub season: String,
    pub description: String,
    pub poster_url: Option<String>,
    pub published_at: DateTime<Utc>,
}

impl CreateSeasonalReportParam {
    pub fn from_dto(dto: CreateSeasonalReportDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        validate::text(&mut errors, "title", &dto.title, Some(200));
        validate::text(&mut errors, "season", &dto.season, Some(50));
        validate::text(&mut errors, "description", &dto.description, None);
        let poster_url = blank_to_none(dto.poster_url);
        validate::optional_url(&mut errors, "poster_url", poster_url.as_deref(), URL_MAX_LENGTH);
        errors.into_result()?;

        Ok(Self {
            title: dto.title,
            season: dto.season,
            description: dto.description,
            poster_url,
            published_at: dto.published_at,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateSeasonalReportParam {
    pub id: i32,
    pub title: Option<String>,
    pub season: Option<String>,
    pub description: Option<String>,
    pub poster_url: Option<Option<String>>,
    pub published_at: Option<DateTime<Utc>>,
}

impl UpdateSeasonalReportParam {
    pub fn from_dto(id: i32, dto: UpdateSeasonalReportDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(title) = dto.title.as_deref() {
            validate::text(&mut errors, "title", title, Some(200));
        }
        if let Some(season) = dto.season.as_deref() {
            validate::text(&mut errors, "season", season, Some(50));
        }
        if let Some(description) = dto.description.as_deref() {
            validate::text(&mut errors, "description", description, None);
        }
        let poster_url = dto.poster_url.map(blank_to_none);
        if let Some(Some(url)) = poster_url.as_ref() {
            validate::url(&mut errors, "poster_url", url, URL_MAX_LENGTH);
        }
        errors.into_result()?;

        Ok(Self {
            id,
            title: dto.title,
            season: dto.season,
            description: dto.description,
            poster_url,
            published_at: dto.published_at,
        })
    }
}
