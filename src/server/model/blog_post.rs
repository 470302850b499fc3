//! Blog post domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::blog_post::{BlogPostDto, CreateBlogPostDto, UpdateBlogPostDto},
    server::{error::validation::ValidationErrors, util::validate},
};

#[derive(Debug, Clone, PartialEq)]
pub struct BlogPost {
    pub id: i32,
    pub author_id: i32,
    pub author_username: String,
    pub title: String,
    pub content: String,
    /// Private posts are only visible to their author and staff.
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPost {
    pub fn into_dto(self) -> BlogPostDto {
        BlogPostDto {
            id: self.id,
            author: self.author_id,
            author_username: self.author_username,
            title: self.title,
            content: self.content,
            is_public: self.is_public,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::blog_post::Model, author: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            author_id: entity.author_id,
            author_username: author.username,
            title: entity.title,
            content: entity.content,
            is_public: entity.is_public,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// The author is taken from the session, never from the payload.
#[derive(Debug, Clone)]
pub struct CreateBlogPostParam {
    pub author_id: i32,
    pub title: String,
    pub content: String,
    pub is_public: bool,
}

impl CreateBlogPostParam {
    pub fn from_dto(author_id: i32, dto: CreateBlogPostDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        validate::text(&mut errors, "title", &dto.title, Some(200));
        validate::text(&mut errors, "content", &dto.content, None);
        errors.into_result()?;

        Ok(Self {
            author_id,
            title: dto.title,
            content: dto.content,
            is_public: dto.is_public.unwrap_or(true),
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateBlogPostParam {
    pub id: i32,
    pub title: Option<String>,
    pub content: Option<String>,
    pub is_public: Option<bool>,
}

impl UpdateBlogPostParam {
    pub fn from_dto(id: i32, dto: UpdateBlogPostDto) -> Result<Self, ValidationErrors> {
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
            is_public: dto.is_public,
        })
    }
}
