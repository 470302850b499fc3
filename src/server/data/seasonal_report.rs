use crate::server::model::seasonal_report::{
    CreateSeasonalReportParam, SeasonalReport, UpdateSeasonalReportParam,
};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

pub struct SeasonalReportRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SeasonalReportRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all reports, most recently published first.
    pub async fn get_all(&self) -> Result<Vec<SeasonalReport>, DbErr> {
        let entities = entity::prelude::SeasonalReport::find()
            .order_by_desc(entity::seasonal_report::Column::PublishedAt)
            .order_by_desc(entity::seasonal_report::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(SeasonalReport::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<SeasonalReport>, DbErr> {
        let entity = entity::prelude::SeasonalReport::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(SeasonalReport::from_entity))
    }

    pub async fn create(&self, param: CreateSeasonalReportParam) -> Result<SeasonalReport, DbErr> {
        let entity = entity::seasonal_report::ActiveModel {
            title: ActiveValue::Set(param.title),
            season: ActiveValue::Set(param.season),
            description: ActiveValue::Set(param.description),
            poster_url: ActiveValue::Set(param.poster_url),
            published_at: ActiveValue::Set(param.published_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(SeasonalReport::from_entity(entity))
    }

    pub async fn update(
        &self,
        param: UpdateSeasonalReportParam,
    ) -> Result<Option<SeasonalReport>, DbErr> {
        let Some(report) = entity::prelude::SeasonalReport::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::seasonal_report::ActiveModel = report.into();
        if let Some(title) = param.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(season) = param.season {
            active_model.season = ActiveValue::Set(season);
        }
        if let Some(description) = param.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(poster_url) = param.poster_url {
            active_model.poster_url = ActiveValue::Set(poster_url);
        }
        if let Some(published_at) = param.published_at {
            active_model.published_at = ActiveValue::Set(published_at);
        }
        let entity = active_model.update(self.db).await?;

        Ok(Some(SeasonalReport::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::SeasonalReport::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
