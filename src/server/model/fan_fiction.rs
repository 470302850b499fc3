//! Fan-fiction domain models, parameters and listing queries.

use std::fmt;

use chrono::{DateTime, Utc};
use url::form_urlencoded;

use crate::{
    model::fan_fiction::{
        CreateFanFictionDto, FanFictionDto, FanFictionQueryDto, PaginatedFanFictionDto,
        UpdateFanFictionDto,
    },
    server::{
        error::validation::ValidationErrors,
        model::{event::dedup_ids, tag::Tag, team_member::blank_to_none},
        util::validate,
    },
};

pub const FAN_FICTION_PATH: &str = "/api/v1/fanfiction";
pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 20;
/// SQLite binds offsets as signed 64-bit integers.
pub const MAX_OFFSET: u64 = i64::MAX as u64;

const TEXT_MAX_LENGTH: usize = 700;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FanFictionStatus {
    Ongoing,
    Completed,
}

impl FanFictionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ongoing => "ongoing",
            Self::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ongoing" => Some(Self::Ongoing),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    fn validate(errors: &mut ValidationErrors, value: &str) -> Option<Self> {
        let status = Self::parse(value);
        if status.is_none() {
            errors.add("status", format!("\"{}\" is not a valid choice.", value));
        }
        status
    }
}

impl fmt::Display for FanFictionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FanFiction {
    pub id: i32,
    pub author_id: i32,
    pub author_username: String,
    pub front_page_url: Option<String>,
    pub title: String,
    pub summary: String,
    pub status: FanFictionStatus,
    pub tags: Vec<Tag>,
    pub created_at: DateTime<Utc>,
}

impl FanFiction {
    pub fn into_dto(self) -> FanFictionDto {
        FanFictionDto {
            id: self.id,
            author: self.author_id,
            author_username: self.author_username,
            front_page_url: self.front_page_url,
            title: self.title,
            summary: self.summary,
            status: self.status.to_string(),
            tags: self.tags.into_iter().map(Tag::into_dto).collect(),
            created_at: self.created_at,
        }
    }

    /// Builds a fan-fiction from its row, its author and its loaded tags.
    ///
    /// Unknown stored statuses read back as `Ongoing`.
    pub fn from_entity(
        entity: entity::fan_fiction::Model,
        author: entity::user::Model,
        tags: Vec<Tag>,
    ) -> Self {
        Self {
            id: entity.id,
            author_id: entity.author_id,
            author_username: author.username,
            front_page_url: entity.front_page_url,
            title: entity.title,
            summary: entity.summary,
            status: FanFictionStatus::parse(&entity.status).unwrap_or(FanFictionStatus::Ongoing),
            tags,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateFanFictionParam {
    pub author_id: i32,
    pub title: String,
    pub summary: String,
    pub status: FanFictionStatus,
    pub front_page_url: Option<String>,
    pub tag_ids: Vec<i32>,
}

impl CreateFanFictionParam {
    pub fn from_dto(author_id: i32, dto: CreateFanFictionDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        validate::text(&mut errors, "title", &dto.title, Some(TEXT_MAX_LENGTH));
        validate::text(&mut errors, "summary", &dto.summary, None);
        let status = FanFictionStatus::validate(&mut errors, &dto.status);
        let front_page_url = blank_to_none(dto.front_page_url);
        validate::optional_url(
            &mut errors,
            "front_page_url",
            front_page_url.as_deref(),
            TEXT_MAX_LENGTH,
        );
        errors.into_result()?;

        Ok(Self {
            author_id,
            title: dto.title,
            summary: dto.summary,
            status: status.unwrap_or(FanFictionStatus::Ongoing),
            front_page_url,
            tag_ids: dedup_ids(dto.tag_ids),
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateFanFictionParam {
    pub id: i32,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub status: Option<FanFictionStatus>,
    /// `Some(None)` clears the link, including when an empty string was sent.
    pub front_page_url: Option<Option<String>>,
    pub tag_ids: Option<Vec<i32>>,
}

impl UpdateFanFictionParam {
    pub fn from_dto(id: i32, dto: UpdateFanFictionDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(title) = dto.title.as_deref() {
            validate::text(&mut errors, "title", title, Some(TEXT_MAX_LENGTH));
        }
        if let Some(summary) = dto.summary.as_deref() {
            validate::text(&mut errors, "summary", summary, None);
        }
        let status = dto
            .status
            .as_deref()
            .and_then(|s| FanFictionStatus::validate(&mut errors, s));
        let front_page_url = dto.front_page_url.map(blank_to_none);
        if let Some(Some(url)) = front_page_url.as_ref() {
            validate::url(&mut errors, "front_page_url", url, TEXT_MAX_LENGTH);
        }
        errors.into_result()?;

        Ok(Self {
            id,
            title: dto.title,
            summary: dto.summary,
            status,
            front_page_url,
            tag_ids: dto.tag_ids.map(dedup_ids),
        })
    }
}

/// Search terms plus the requested page window.
#[derive(Debug, Clone, PartialEq)]
pub struct FanFictionQuery {
    /// Raw search string, echoed into pagination links.
    pub search: Option<String>,
    pub terms: Vec<String>,
    pub limit: u64,
    pub offset: u64,
}

impl FanFictionQuery {
    /// Splits the search on whitespace and commas, and clamps the page size.
    ///
    /// A missing or zero limit falls back to the default page size. Offsets past
    /// [`MAX_OFFSET`] are clamped to it.
    pub fn from_dto(dto: FanFictionQueryDto) -> Self {
        let search = dto.search.filter(|s| !s.trim().is_empty());
        let terms = search
            .as_deref()
            .map(|s| {
                s.split(|c: char| c.is_whitespace() || c == ',')
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let limit = match dto.limit {
            None | Some(0) => DEFAULT_PAGE_SIZE,
            Some(limit) => limit.min(MAX_PAGE_SIZE),
        };

        Self {
            search,
            terms,
            limit,
            offset: dto.offset.unwrap_or(0).min(MAX_OFFSET),
        }
    }

    fn link(&self, offset: Option<u64>) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query.append_pair("limit", &self.limit.to_string());
        if let Some(offset) = offset {
            query.append_pair("offset", &offset.to_string());
        }
        if let Some(search) = self.search.as_deref() {
            query.append_pair("search", search);
        }
        format!("{}?{}", FAN_FICTION_PATH, query.finish())
    }

    pub fn next_link(&self, count: u64) -> Option<String> {
        let next = self.offset.saturating_add(self.limit);
        (next < count).then(|| self.link(Some(next)))
    }

    /// The first page omits `offset` entirely.
    pub fn previous_link(&self) -> Option<String> {
        if self.offset == 0 {
            return None;
        }
        if self.offset <= self.limit {
            return Some(self.link(None));
        }
        Some(self.link(Some(self.offset - self.limit)))
    }
}

/// One page of fan-fiction and the total number of matches.
#[derive(Debug, Clone)]
pub struct FanFictionPage {
    pub count: u64,
    pub results: Vec<FanFiction>,
}

impl FanFictionPage {
    pub fn into_dto(self, query: &FanFictionQuery) -> PaginatedFanFictionDto {
        PaginatedFanFictionDto {
            count: self.count,
            next: query.next_link(self.count),
            previous: query.previous_link(),
            results: self.results.into_iter().map(FanFiction::into_dto).collect(),
        }
    }
}
