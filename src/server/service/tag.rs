//! Tag business rules: slug derivation, uniqueness and tag id resolution.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::tag::TagRepository,
    error::{validation::ValidationErrors, AppError},
    model::tag::{CreateTagParam, Tag, TagRecord, UpdateTagParam},
    util::slug::slugify,
};

const NAME_TAKEN: &str = "tag with this name already exists.";
const SLUG_TAKEN: &str = "tag with this slug already exists.";
const SLUG_UNDERIVABLE: &str = "Could not derive a slug from this name.";

pub struct TagService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Tag>, AppError> {
        Ok(TagRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Tag>, AppError> {
        Ok(TagRepository::new(self.db).find_by_id(id).await?)
    }

    /// Creates a tag, deriving the slug from the name when none was given.
    ///
    /// # Returns
    /// - `Ok(Tag)` - The created tag
    /// - `Err(AppError::Validation(_))` - Name or slug already used, or no slug derivable
    pub async fn create(&self, param: CreateTagParam) -> Result<Tag, AppError> {
        let slug = match param.slug {
            Some(slug) => slug,
            None => derive_slug(&param.name)?,
        };
        let record = TagRecord {
            name: param.name,
            slug,
        };

        self.check_unique(&record, None).await?;

        match TagRepository::new(self.db).create(record.clone()).await {
            Ok(tag) => Ok(tag),
            Err(err) => Err(self.map_write_error(err, &record, None).await),
        }
    }

    /// Updates a tag. A blank slug is derived again from the resulting name; an
    /// omitted slug is kept even when the name changes.
    pub async fn update(&self, param: UpdateTagParam) -> Result<Option<Tag>, AppError> {
        let repo = TagRepository::new(self.db);
        let Some(existing) = repo.find_by_id(param.id).await? else {
            return Ok(None);
        };

        let name = param.name.unwrap_or(existing.name);
        let slug = match param.slug {
            Some(slug) if slug.trim().is_empty() => derive_slug(&name)?,
            Some(slug) => slug,
            None => existing.slug,
        };
        let record = TagRecord { name, slug };

        self.check_unique(&record, Some(param.id)).await?;

        match repo.update(param.id, record.clone()).await {
            Ok(tag) => Ok(tag),
            Err(err) => Err(self.map_write_error(err, &record, Some(param.id)).await),
        }
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(TagRepository::new(self.db).delete(id).await?)
    }

    /// Reports a unique index violation from a write that raced past
    /// `check_unique` as the same field errors. Other errors pass through.
    pub(crate) async fn map_write_error(
        &self,
        err: DbErr,
        record: &TagRecord,
        exclude_id: Option<i32>,
    ) -> AppError {
        if !matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
            return err.into();
        }

        match self.check_unique(record, exclude_id).await {
            Err(conflict) => conflict,
            Ok(()) => ValidationErrors::single("name", NAME_TAKEN).into(),
        }
    }

    async fn check_unique(&self, record: &TagRecord, exclude_id: Option<i32>) -> Result<(), AppError> {
        let repo = TagRepository::new(self.db);
        let mut errors = ValidationErrors::new();

        if repo.name_taken(&record.name, exclude_id).await? {
            errors.add("name", NAME_TAKEN);
        }
        if repo.slug_taken(&record.slug, exclude_id).await? {
            errors.add("slug", SLUG_TAKEN);
        }

        Ok(errors.into_result()?)
    }
}

fn derive_slug(name: &str) -> Result<String, ValidationErrors> {
    let slug = slugify(name);
    if slug.is_empty() {
        return Err(ValidationErrors::single("slug", SLUG_UNDERIVABLE));
    }
    Ok(slug)
}

/// Ensures every id in `tag_ids` names an existing tag.
///
/// Generic over the connection so it can run inside the transaction that writes
/// the associations.
pub async fn check_tag_ids<C: ConnectionTrait>(db: &C, tag_ids: &[i32]) -> Result<(), AppError> {
    let found = TagRepository::new(db).find_by_ids(tag_ids).await?;
    if found.len() == tag_ids.len() {
        return Ok(());
    }

    let mut errors = ValidationErrors::new();
    for id in tag_ids {
        if !found.iter().any(|t| t.id == *id) {
            errors.add("tag_ids", format!("Invalid pk \"{}\" - object does not exist.", id));
        }
    }

    Err(errors.into())
}
