//! Tag domain models and parameters.

use crate::{
    model::tag::{CreateTagDto, TagDto, UpdateTagDto},
    server::{
        error::validation::ValidationErrors,
        util::{slug::is_valid_slug, validate},
    },
};

pub const TAG_MAX_LENGTH: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub id: i32,
    pub name: String,
    pub slug: String,
}

impl Tag {
    pub fn into_dto(self) -> TagDto {
        TagDto {
            id: self.id,
            name: self.name,
            slug: self.slug,
        }
    }

    pub fn from_entity(entity: entity::tag::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            slug: entity.slug,
        }
    }
}

/// Checks a client-supplied slug. Blank slugs are allowed and later derived from the name.
fn check_slug(errors: &mut ValidationErrors, slug: Option<&str>) {
    let Some(slug) = slug.filter(|s| !s.trim().is_empty()) else {
        return;
    };
    if !is_valid_slug(slug) {
        errors.add(
            "slug",
            "Enter a valid slug consisting of letters, numbers, underscores or hyphens.",
        );
    }
    validate::max_length(errors, "slug", slug, Some(TAG_MAX_LENGTH));
}

/// `slug` is `None` when the slug should be derived from `name`.
#[derive(Debug, Clone)]
pub struct CreateTagParam {
    pub name: String,
    pub slug: Option<String>,
}

impl CreateTagParam {
    pub fn from_dto(dto: CreateTagDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        validate::text(&mut errors, "name", &dto.name, Some(TAG_MAX_LENGTH));
        check_slug(&mut errors, dto.slug.as_deref());
        errors.into_result()?;

        Ok(Self {
            name: dto.name,
            slug: dto.slug.filter(|s| !s.trim().is_empty()),
        })
    }
}

/// A `Some("")` slug asks for the slug to be derived again from the name.
#[derive(Debug, Clone)]
pub struct UpdateTagParam {
    pub id: i32,
    pub name: Option<String>,
    pub slug: Option<String>,
}

impl UpdateTagParam {
    pub fn from_dto(id: i32, dto: UpdateTagDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(name) = dto.name.as_deref() {
            validate::text(&mut errors, "name", name, Some(TAG_MAX_LENGTH));
        }
        check_slug(&mut errors, dto.slug.as_deref());
        errors.into_result()?;

        Ok(Self {
            id,
            name: dto.name,
            slug: dto.slug,
        })
    }
}

/// Resolved values written to the tag table.
#[derive(Debug, Clone)]
pub struct TagRecord {
    pub name: String,
    pub slug: String,
}
