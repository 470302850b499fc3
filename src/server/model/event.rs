//! Event domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::event::{CreateEventDto, EventDto, UpdateEventDto},
    server::{
        error::validation::ValidationErrors,
        model::{tag::Tag, team_member::blank_to_none},
        util::validate::{self, URL_MAX_LENGTH},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub poster_url: Option<String>,
    pub tags: Vec<Tag>,
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn into_dto(self) -> EventDto {
        EventDto {
            id: self.id,
            title: self.title,
            description: self.description,
            date: self.date,
            poster_url: self.poster_url,
            tags: self.tags.into_iter().map(Tag::into_dto).collect(),
            created_at: self.created_at,
        }
    }

    /// Builds an event from its row and the tags already loaded for it.
    pub fn from_entity(entity: entity::event::Model, tags: Vec<Tag>) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            date: entity.date,
            poster_url: entity.poster_url,
            tags,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateEventParam {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub poster_url: Option<String>,
    pub tag_ids: Vec<i32>,
}

impl CreateEventParam {
    pub fn from_dto(dto: CreateEventDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        validate::text(&mut errors, "title", &dto.title, Some(200));
        validate::text(&mut errors, "description", &dto.description, None);
        let poster_url = blank_to_none(dto.poster_url);
        validate::optional_url(&mut errors, "poster_url", poster_url.as_deref(), URL_MAX_LENGTH);
        errors.into_result()?;

        Ok(Self {
            title: dto.title,
            description: dto.description,
            date: dto.date,
            poster_url,
            tag_ids: dedup_ids(dto.tag_ids),
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateEventParam {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub poster_url: Option<Option<String>>,
    /// Replaces the whole tag set when present.
    pub tag_ids: Option<Vec<i32>>,
}

impl UpdateEventParam {
    pub fn from_dto(id: i32, dto: UpdateEventDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(title) = dto.title.as_deref() {
            validate::text(&mut errors, "title", title, Some(200));
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
            description: dto.description,
            date: dto.date,
            poster_url,
            tag_ids: dto.tag_ids.map(dedup_ids),
        })
    }
}

/// Drops repeated ids while keeping the first-seen order.
pub fn dedup_ids(ids: Vec<i32>) -> Vec<i32> {
    let mut seen = Vec::with_capacity(ids.len());
    for id in ids {
        if !seen.contains(&id) {
            seen.push(id);
        }
    }
    seen
}
