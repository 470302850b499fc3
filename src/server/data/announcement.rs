use crate::server::model::announcement::{
    Announcement, CreateAnnouncementParam, UpdateAnnouncementParam,
};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct AnnouncementRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AnnouncementRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets announcements ordered by priority, then newest first.
    ///
    /// # Arguments
    /// - `active_only` - Hide inactive announcements
    pub async fn get_all(&self, active_only: bool) -> Result<Vec<Announcement>, DbErr> {
        let mut query = entity::prelude::Announcement::find();
        if active_only {
            query = query.filter(entity::announcement::Column::IsActive.eq(true));
        }

        let entities = query
            .order_by_desc(entity::announcement::Column::Priority)
            .order_by_desc(entity::announcement::Column::CreatedAt)
            .order_by_desc(entity::announcement::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Announcement::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Announcement>, DbErr> {
        let entity = entity::prelude::Announcement::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Announcement::from_entity))
    }

    pub async fn create(&self, param: CreateAnnouncementParam) -> Result<Announcement, DbErr> {
        let entity = entity::announcement::ActiveModel {
            title: ActiveValue::Set(param.title),
            message: ActiveValue::Set(param.message),
            is_active: ActiveValue::Set(param.is_active),
            priority: ActiveValue::Set(param.priority),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Announcement::from_entity(entity))
    }

    pub async fn update(
        &self,
        param: UpdateAnnouncementParam,
    ) -> Result<Option<Announcement>, DbErr> {
        let Some(announcement) = entity::prelude::Announcement::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::announcement::ActiveModel = announcement.into();
        if let Some(title) = param.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(message) = param.message {
            active_model.message = ActiveValue::Set(message);
        }
        if let Some(is_active) = param.is_active {
            active_model.is_active = ActiveValue::Set(is_active);
        }
        if let Some(priority) = param.priority {
            active_model.priority = ActiveValue::Set(priority);
        }

        let entity = active_model.update(self.db).await?;

        Ok(Some(Announcement::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Announcement::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
