use sea_orm::DatabaseConnection;

use crate::server::{
    data::announcement::AnnouncementRepository,
    error::AppError,
    model::announcement::{Announcement, CreateAnnouncementParam, UpdateAnnouncementParam},
};

pub struct AnnouncementService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnnouncementService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists announcements; inactive ones are only included for staff.
    pub async fn get_all(&self, include_inactive: bool) -> Result<Vec<Announcement>, AppError> {
        Ok(AnnouncementRepository::new(self.db)
            .get_all(!include_inactive)
            .await?)
    }

    /// Gets an announcement, treating an inactive one as missing unless `include_inactive`.
    pub async fn get_by_id(
        &self,
        id: i32,
        include_inactive: bool,
    ) -> Result<Option<Announcement>, AppError> {
        let announcement = AnnouncementRepository::new(self.db).find_by_id(id).await?;

        Ok(announcement.filter(|a| include_inactive || a.is_active))
    }

    pub async fn create(&self, param: CreateAnnouncementParam) -> Result<Announcement, AppError> {
        Ok(AnnouncementRepository::new(self.db).create(param).await?)
    }

    pub async fn update(
        &self,
        param: UpdateAnnouncementParam,
    ) -> Result<Option<Announcement>, AppError> {
        Ok(AnnouncementRepository::new(self.db).update(param).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(AnnouncementRepository::new(self.db).delete(id).await?)
    }
}
