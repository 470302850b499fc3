use crate::server::model::fan_art::{CreateFanArtParam, FanArt, UpdateFanArtParam};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
};

pub struct FanArtRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FanArtRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all fan art newest first, joined with the registered artist.
    pub async fn get_all(&self) -> Result<Vec<FanArt>, DbErr> {
        let rows = entity::prelude::FanArt::find()
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::fan_art::Column::CreatedAt)
            .order_by_desc(entity::fan_art::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(art, artist)| FanArt::from_entity(art, artist))
            .collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<FanArt>, DbErr> {
        let row = entity::prelude::FanArt::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(row.map(|(art, artist)| FanArt::from_entity(art, artist)))
    }

    pub async fn create(&self, param: CreateFanArtParam) -> Result<FanArt, DbErr> {
        let entity = entity::fan_art::ActiveModel {
            image_url: ActiveValue::Set(param.image_url),
            artist_name: ActiveValue::Set(param.artist_name),
            artist_id: ActiveValue::Set(param.artist_id),
            caption: ActiveValue::Set(param.caption),
            week: ActiveValue::Set(param.week),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let artist = self.artist(entity.artist_id).await?;

        Ok(FanArt::from_entity(entity, artist))
    }

    pub async fn update(&self, param: UpdateFanArtParam) -> Result<Option<FanArt>, DbErr> {
        let Some(art) = entity::prelude::FanArt::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::fan_art::ActiveModel = art.into();
        if let Some(image_url) = param.image_url {
            active_model.image_url = ActiveValue::Set(image_url);
        }
        if let Some(artist_name) = param.artist_name {
            active_model.artist_name = ActiveValue::Set(artist_name);
        }
        if let Some(artist_id) = param.artist_id {
            active_model.artist_id = ActiveValue::Set(artist_id);
        }
        if let Some(caption) = param.caption {
            active_model.caption = ActiveValue::Set(caption);
        }
        if let Some(week) = param.week {
            active_model.week = ActiveValue::Set(week);
        }
        let entity = active_model.update(self.db).await?;

        let artist = self.artist(entity.artist_id).await?;

        Ok(Some(FanArt::from_entity(entity, artist)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::FanArt::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    async fn artist(&self, artist_id: Option<i32>) -> Result<Option<entity::user::Model>, DbErr> {
        match artist_id {
            Some(id) => entity::prelude::User::find_by_id(id).one(self.db).await,
            None => Ok(None),
        }
    }
}
