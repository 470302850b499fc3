use chrono::{DateTime, Utc};

use crate::{
    model::chapter::{ChapterDto, CreateChapterDto, UpdateChapterDto},
    server::{error::validation::ValidationErrors, util::validate},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Chapter {
    pub id: i32,
    pub fan_fiction_id: i32,
    pub chapter_number: i32,
    pub title: String,
    pub content: String,
    pub published_at: DateTime<Utc>,
}

impl Chapter {
    pub fn into_dto(self) -> ChapterDto {
        ChapterDto {
            id: self.id,
            fanfiction: self.fan_fiction_id,
            chapter_number: self.chapter_number,
            title: self.title,
            content: self.content,
            published_at: self.published_at,
        }
    }

    pub fn from_entity(entity: entity::chapter::Model) -> Self {
        Self {
            id: entity.id,
            fan_fiction_id: entity.fan_fiction_id,
            chapter_number: entity.chapter_number,
            title: entity.title,
            content: entity.content,
            published_at: entity.published_at,
        }
    }
}

/// The chapter number is assigned by the service, never supplied by the client.
#[derive(Debug, Clone)]
pub struct CreateChapterParam {
    pub fan_fiction_id: i32,
    pub title: String,
    pub content: String,
}

impl CreateChapterParam {
    pub fn from_dto(fan_fiction_id: i32, dto: CreateChapterDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        validate::text(&mut errors, "title", &dto.title, Some(200));
        validate::text(&mut errors, "content", &dto.content, None);
        errors.into_result()?;

        Ok(Self {
            fan_fiction_id,
            title: dto.title,
            content: dto.content,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateChapterParam {
    pub id: i32,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl UpdateChapterParam {
    pub fn from_dto(id: i32, dto: UpdateChapterDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(title) = dto.title.as_deref() {
            validate::text(&mut errors, "title", title, Some(200));
        }
        if let Some(content) = dto.content.as_deref() {
            validate::text(&mut errors, "content", content, None);
        }
        errors.into_result()?;

        Ok(Self {
            id,
            title: dto.title,
            content: dto.content,
        })
    }
}
