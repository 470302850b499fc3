use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::event::EventRepository,
    error::AppError,
    model::event::{CreateEventParam, Event, UpdateEventParam},
    service::tag::check_tag_ids,
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Event>, AppError> {
        Ok(EventRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Event>, AppError> {
        Ok(EventRepository::new(self.db).find_by_id(id).await?)
    }

    /// Creates the event and its tag associations in one transaction.
    pub async fn create(&self, param: CreateEventParam) -> Result<Event, AppError> {
        let txn = self.db.begin().await?;

        check_tag_ids(&txn, &param.tag_ids).await?;
        let event = EventRepository::new(&txn).create(param).await?;

        txn.commit().await?;

        Ok(event)
    }

    pub async fn update(&self, param: UpdateEventParam) -> Result<Option<Event>, AppError> {
        let txn = self.db.begin().await?;

        if let Some(tag_ids) = param.tag_ids.as_deref() {
            check_tag_ids(&txn, tag_ids).await?;
        }
        let event = EventRepository::new(&txn).update(param).await?;

        txn.commit().await?;

        Ok(event)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(EventRepository::new(self.db).delete(id).await?)
    }
}
