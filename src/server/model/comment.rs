//! Comment domain models and parameters.
//!
//! A comment hangs off exactly one parent, addressed by a `(type, id)` pair with
//! no database foreign key. `CommentParent` is the typed form of that pair.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::{
    model::comment::{CommentDto, CommentQueryDto, CreateCommentDto, UpdateCommentDto},
    server::{error::validation::ValidationErrors, util::validate},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentParent {
    Blog(i32),
    FanFiction(i32),
    Chapter(i32),
}

impl CommentParent {
    pub const BLOG: &'static str = "blog";
    pub const FAN_FICTION: &'static str = "fanfiction";
    pub const CHAPTER: &'static str = "chapter";

    /// Resolves a wire `(parent_type, parent_id)` pair, `None` for an unknown type.
    pub fn parse(parent_type: &str, parent_id: i32) -> Option<Self> {
        match parent_type {
            Self::BLOG => Some(Self::Blog(parent_id)),
            Self::FAN_FICTION => Some(Self::FanFiction(parent_id)),
            Self::CHAPTER => Some(Self::Chapter(parent_id)),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Blog(_) => Self::BLOG,
            Self::FanFiction(_) => Self::FAN_FICTION,
            Self::Chapter(_) => Self::CHAPTER,
        }
    }

    pub fn id(&self) -> i32 {
        match *self {
            Self::Blog(id) | Self::FanFiction(id) | Self::Chapter(id) => id,
        }
    }
}

impl fmt::Display for CommentParent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind(), self.id())
    }
}

fn invalid_parent_type(value: &str) -> String {
    format!("\"{}\" is not a valid choice.", value)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub author_id: i32,
    pub author_username: String,
    pub content: String,
    pub parent: CommentParent,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            author: self.author_id,
            author_username: self.author_username,
            content: self.content,
            parent_type: self.parent.kind().to_string(),
            parent_id: self.parent.id(),
            created_at: self.created_at,
        }
    }

    /// Returns `None` when the stored parent type is not one this server writes.
    pub fn from_entity(
        entity: entity::comment::Model,
        author: entity::user::Model,
    ) -> Option<Self> {
        let parent = CommentParent::parse(&entity.parent_type, entity.parent_id)?;

        Some(Self {
            id: entity.id,
            author_id: entity.author_id,
            author_username: author.username,
            content: entity.content,
            parent,
            created_at: entity.created_at,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateCommentParam {
    pub author_id: i32,
    pub content: String,
    pub parent: CommentParent,
}

impl CreateCommentParam {
    pub fn from_dto(author_id: i32, dto: CreateCommentDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        validate::text(&mut errors, "content", &dto.content, None);
        let parent = CommentParent::parse(&dto.parent_type, dto.parent_id);
        if parent.is_none() {
            errors.add("parent_type", invalid_parent_type(&dto.parent_type));
        }

        match parent {
            Some(parent) if errors.is_empty() => Ok(Self {
                author_id,
                content: dto.content,
                parent,
            }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateCommentParam {
    pub id: i32,
    pub content: Option<String>,
}

impl UpdateCommentParam {
    pub fn from_dto(id: i32, dto: UpdateCommentDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(content) = dto.content.as_deref() {
            validate::text(&mut errors, "content", content, None);
        }
        errors.into_result()?;

        Ok(Self {
            id,
            content: dto.content,
        })
    }
}

/// Filter for the comment list. Applied only when both query values are present
/// and non-blank.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CommentFilter {
    pub parent: Option<CommentParent>,
}

impl CommentFilter {
    pub fn from_dto(dto: CommentQueryDto) -> Result<Self, ValidationErrors> {
        let non_blank = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        let (Some(parent_type), Some(parent_id)) =
            (non_blank(dto.parent_type), non_blank(dto.parent_id))
        else {
            return Ok(Self::default());
        };

        let parent_id = parent_id
            .trim()
            .parse::<i32>()
            .map_err(|_| ValidationErrors::single("parent_id", "A valid integer is required."))?;

        CommentParent::parse(&parent_type, parent_id)
            .map(|parent| Self {
                parent: Some(parent),
            })
            .ok_or_else(|| ValidationErrors::single("parent_type", invalid_parent_type(&parent_type)))
    }
}
