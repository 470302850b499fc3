//! Announcement domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::announcement::{AnnouncementDto, CreateAnnouncementDto, UpdateAnnouncementDto},
    server::{error::validation::ValidationErrors, util::validate},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Announcement {
    pub id: i32,
    pub title: String,
    pub message: String,
    /// Inactive announcements are only visible to staff.
    pub is_active: bool,
    /// Higher priorities are listed first.
    pub priority: i32,
    pub created_at: DateTime<Utc>,
}

impl Announcement {
    pub fn into_dto(self) -> AnnouncementDto {
        AnnouncementDto {
            id: self.id,
            title: self.title,
            message: self.message,
            is_active: self.is_active,
            priority: self.priority,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::announcement::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            message: entity.message,
            is_active: entity.is_active,
            priority: entity.priority,
            created_at: entity.created_at,
        }
    }
}

fn check_priority(errors: &mut ValidationErrors, priority: Option<i32>) {
    if matches!(priority, Some(p) if p < 0) {
        errors.add("priority", "Ensure this value is greater than or equal to 0.");
    }
}

#[derive(Debug, Clone)]
pub struct CreateAnnouncementParam {
    pub title: String,
    pub message: String,
    pub is_active: bool,
    pub priority: i32,
}

impl CreateAnnouncementParam {
    pub fn from_dto(dto: CreateAnnouncementDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        validate::text(&mut errors, "title", &dto.title, Some(200));
        validate::text(&mut errors, "message", &dto.message, None);
        check_priority(&mut errors, dto.priority);
        errors.into_result()?;

        Ok(Self {
            title: dto.title,
            message: dto.message,
            is_active: dto.is_active.unwrap_or(true),
            priority: dto.priority.unwrap_or(0),
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateAnnouncementParam {
    pub id: i32,
    pub title: Option<String>,
    pub message: Option<String>,
    pub is_active: Option<bool>,
    pub priority: Option<i32>,
}

impl UpdateAnnouncementParam {
    pub fn from_dto(id: i32, dto: UpdateAnnouncementDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(title) = dto.title.as_deref() {
            validate::text(&mut errors, "title", title, Some(200));
        }
        if let Some(message) = dto.message.as_deref() {
            validate::text(&mut errors, "message", message, None);
        }
        check_priority(&mut errors, dto.priority);
        errors.into_result()?;

        Ok(Self {
            id,
            title: dto.title,
            message: dto.message,
            is_active: dto.is_active,
            priority: dto.priority,
        })
    }
}
