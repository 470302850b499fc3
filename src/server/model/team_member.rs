//! Team member domain models and parameters.

use crate::{
    model::team_member::{CreateTeamMemberDto, TeamMemberDto, UpdateTeamMemberDto},
    server::{
        error::validation::ValidationErrors,
        util::validate::{self, URL_MAX_LENGTH},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct TeamMember {
    pub id: i32,
    pub name: String,
    pub role: String,
    /// Academic year served, e.g. `2024-25`.
    pub tenure: String,
    pub image_url: Option<String>,
    pub institute_email: Option<String>,
    pub instagram_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub is_active: bool,
}

impl TeamMember {
    pub fn into_dto(self) -> TeamMemberDto {
        TeamMemberDto {
            id: self.id,
            name: self.name,
            role: self.role,
            tenure: self.tenure,
            image_url: self.image_url,
            institute_email: self.institute_email,
            instagram_url: self.instagram_url,
            linkedin_url: self.linkedin_url,
            is_active: self.is_active,
        }
    }

    pub fn from_entity(entity: entity::team_member::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            role: entity.role,
            tenure: entity.tenure,
            image_url: entity.image_url,
            institute_email: entity.institute_email,
            instagram_url: entity.instagram_url,
            linkedin_url: entity.linkedin_url,
            is_active: entity.is_active,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTeamMemberParam {
    pub name: String,
    pub role: String,
    pub tenure: String,
    pub image_url: Option<String>,
    pub institute_email: Option<String>,
    pub instagram_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub is_active: bool,
}

impl CreateTeamMemberParam {
    pub fn from_dto(dto: CreateTeamMemberDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        validate::text(&mut errors, "name", &dto.name, Some(100));
        validate::text(&mut errors, "role", &dto.role, Some(100));
        validate::text(&mut errors, "tenure", &dto.tenure, Some(9));

        let image_url = blank_to_none(dto.image_url);
        let institute_email = blank_to_none(dto.institute_email);
        let instagram_url = blank_to_none(dto.instagram_url);
        let linkedin_url = blank_to_none(dto.linkedin_url);

        validate::optional_url(&mut errors, "image_url", image_url.as_deref(), URL_MAX_LENGTH);
        validate::optional_url(&mut errors, "instagram_url", instagram_url.as_deref(), URL_MAX_LENGTH);
        validate::optional_url(&mut errors, "linkedin_url", linkedin_url.as_deref(), URL_MAX_LENGTH);
        if let Some(email) = institute_email.as_deref() {
            validate::email(&mut errors, "institute_email", email);
        }

        errors.into_result()?;

        Ok(Self {
            name: dto.name,
            role: dto.role,
            tenure: dto.tenure,
            image_url,
            institute_email,
            instagram_url,
            linkedin_url,
            is_active: dto.is_active.unwrap_or(true),
        })
    }
}

/// Partial update; `None` leaves a field unchanged, `Some(None)` clears a nullable field.
#[derive(Debug, Clone)]
pub struct UpdateTeamMemberParam {
    pub id: i32,
    pub name: Option<String>,
    pub role: Option<String>,
    pub tenure: Option<String>,
    pub image_url: Option<Option<String>>,
    pub institute_email: Option<Option<String>>,
    pub instagram_url: Option<Option<String>>,
    pub linkedin_url: Option<Option<String>>,
    pub is_active: Option<bool>,
}

impl UpdateTeamMemberParam {
    pub fn from_dto(id: i32, dto: UpdateTeamMemberDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Some(name) = dto.name.as_deref() {
            validate::text(&mut errors, "name", name, Some(100));
        }
        if let Some(role) = dto.role.as_deref() {
            validate::text(&mut errors, "role", role, Some(100));
        }
        if let Some(tenure) = dto.tenure.as_deref() {
            validate::text(&mut errors, "tenure", tenure, Some(9));
        }

        let image_url = dto.image_url.map(blank_to_none);
        let institute_email = dto.institute_email.map(blank_to_none);
        let instagram_url = dto.instagram_url.map(blank_to_none);
        let linkedin_url = dto.linkedin_url.map(blank_to_none);

        for (field, value) in [
            ("image_url", &image_url),
            ("instagram_url", &instagram_url),
            ("linkedin_url", &linkedin_url),
        ] {
            if let Some(Some(url)) = value {
                validate::url(&mut errors, field, url, URL_MAX_LENGTH);
            }
        }
        if let Some(Some(email)) = institute_email.as_ref() {
            validate::email(&mut errors, "institute_email", email);
        }

        errors.into_result()?;

        Ok(Self {
            id,
            name: dto.name,
            role: dto.role,
            tenure: dto.tenure,
            image_url,
            institute_email,
            instagram_url,
            linkedin_url,
            is_active: dto.is_active,
        })
    }
}

/// Treats an empty or whitespace-only optional string as absent.
pub fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
