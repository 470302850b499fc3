use sea_orm::DatabaseConnection;

use crate::server::{
    data::seasonal_report::SeasonalReportRepository,
    error::AppError,
    model::seasonal_report::{
        CreateSeasonalReportParam, SeasonalReport, UpdateSeasonalReportParam,
    },
};

pub struct SeasonalReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeasonalReportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<SeasonalReport>, AppError> {
        Ok(SeasonalReportRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<SeasonalReport>, AppError> {
        Ok(SeasonalReportRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn create(&self, param: CreateSeasonalReportParam) -> Result<SeasonalReport, AppError> {
        Ok(SeasonalReportRepository::new(self.db).create(param).await?)
    }

    pub async fn update(
        &self,
        param: UpdateSeasonalReportParam,
    ) -> Result<Option<SeasonalReport>, AppError> {
        Ok(SeasonalReportRepository::new(self.db).update(param).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(SeasonalReportRepository::new(self.db).delete(id).await?)
    }
}
