//! Tag data repository.
//!
//! Slug resolution happens in the service; this repository stores whatever
//! `TagRecord` it is given and answers the uniqueness questions the service asks.

use crate::server::model::tag::{Tag, TagRecord};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct TagRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TagRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Tag>, DbErr> {
        let entities = entity::prelude::Tag::find()
            .order_by_asc(entity::tag::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Tag::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Tag>, DbErr> {
        let entity = entity::prelude::Tag::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Tag::from_entity))
    }

    /// Gets the tags whose ids are in `ids`, ordered by name. Unknown ids are skipped.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Tag>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Tag::find()
            .filter(entity::tag::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::tag::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Tag::from_entity).collect())
    }

    pub async fn create(&self, record: TagRecord) -> Result<Tag, DbErr> {
        let entity = entity::tag::ActiveModel {
            name: ActiveValue::Set(record.name),
            slug: ActiveValue::Set(record.slug),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Tag::from_entity(entity))
    }

    /// Overwrites both name and slug of tag `id`.
    pub async fn update(&self, id: i32, record: TagRecord) -> Result<Option<Tag>, DbErr> {
        let Some(tag) = entity::prelude::Tag::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::tag::ActiveModel = tag.into();
        active_model.name = ActiveValue::Set(record.name);
        active_model.slug = ActiveValue::Set(record.slug);
        let entity = active_model.update(self.db).await?;

        Ok(Some(Tag::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Tag::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether a tag other than `exclude_id` already uses `name`.
    pub async fn name_taken(&self, name: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        self.taken(entity::tag::Column::Name, name, exclude_id).await
    }

    /// Checks whether a tag other than `exclude_id` already uses `slug`.
    pub async fn slug_taken(&self, slug: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        self.taken(entity::tag::Column::Slug, slug, exclude_id).await
    }

    async fn taken(
        &self,
        column: entity::tag::Column,
        value: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Tag::find().filter(column.eq(value));
        if let Some(id) = exclude_id {
            query = query.filter(entity::tag::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }
}
