use crate::server::model::chapter::{Chapter, CreateChapterParam, UpdateChapterParam};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

pub struct ChapterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ChapterRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the chapters of a fan-fiction in reading order.
    pub async fn get_by_fan_fiction(&self, fan_fiction_id: i32) -> Result<Vec<Chapter>, DbErr> {
        let entities = entity::prelude::Chapter::find()
            .filter(entity::chapter::Column::FanFictionId.eq(fan_fiction_id))
            .order_by_asc(entity::chapter::Column::ChapterNumber)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Chapter::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Chapter>, DbErr> {
        let entity = entity::prelude::Chapter::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Chapter::from_entity))
    }

    /// Returns the number the next chapter of `fan_fiction_id` should get.
    ///
    /// Only consistent when read and insert happen in the same transaction.
    pub async fn next_number(&self, fan_fiction_id: i32) -> Result<i32, DbErr> {
        let last = entity::prelude::Chapter::find()
            .filter(entity::chapter::Column::FanFictionId.eq(fan_fiction_id))
            .order_by_desc(entity::chapter::Column::ChapterNumber)
            .one(self.db)
            .await?;

        Ok(last.map_or(1, |c| c.chapter_number + 1))
    }

    pub async fn create(
        &self,
        param: CreateChapterParam,
        chapter_number: i32,
    ) -> Result<Chapter, DbErr> {
        let entity = entity::chapter::ActiveModel {
            fan_fiction_id: ActiveValue::Set(param.fan_fiction_id),
            chapter_number: ActiveValue::Set(chapter_number),
            title: ActiveValue::Set(param.title),
            content: ActiveValue::Set(param.content),
            published_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Chapter::from_entity(entity))
    }

    pub async fn update(&self, param: UpdateChapterParam) -> Result<Option<Chapter>, DbErr> {
        let Some(chapter) = entity::prelude::Chapter::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::chapter::ActiveModel = chapter.into();
        if let Some(title) = param.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(content) = param.content {
            active_model.content = ActiveValue::Set(content);
        }
        let entity = active_model.update(self.db).await?;

        Ok(Some(Chapter::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Chapter::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Ids of every chapter of `fan_fiction_id`, used to cascade comment deletes.
    pub async fn ids_by_fan_fiction(&self, fan_fiction_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Chapter::find()
            .select_only()
            .column(entity::chapter::Column::Id)
            .filter(entity::chapter::Column::FanFictionId.eq(fan_fiction_id))
            .into_tuple()
            .all(self.db)
            .await
    }
}
