use sea_orm::DatabaseConnection;

use crate::server::{
    data::{fan_art::FanArtRepository, user::UserRepository},
    error::{validation::ValidationErrors, AppError},
    model::fan_art::{check_artist, CreateFanArtParam, FanArt, UpdateFanArtParam},
};

pub struct FanArtService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FanArtService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<FanArt>, AppError> {
        Ok(FanArtRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<FanArt>, AppError> {
        Ok(FanArtRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn create(&self, param: CreateFanArtParam) -> Result<FanArt, AppError> {
        self.check_artist_exists(param.artist_id).await?;

        Ok(FanArtRepository::new(self.db).create(param).await?)
    }

    /// Applies a partial update, then checks the artist rule against the merged values.
    pub async fn update(&self, param: UpdateFanArtParam) -> Result<Option<FanArt>, AppError> {
        let repo = FanArtRepository::new(self.db);
        let Some(existing) = repo.find_by_id(param.id).await? else {
            return Ok(None);
        };

        let artist_id = param.artist_id.unwrap_or(existing.artist_id);
        let artist_name = param.artist_name.as_deref().unwrap_or(&existing.artist_name);

        let mut errors = ValidationErrors::new();
        check_artist(&mut errors, artist_id, artist_name);
        errors.into_result()?;

        if let Some(new_artist) = param.artist_id {
            self.check_artist_exists(new_artist).await?;
        }

        Ok(repo.update(param).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(FanArtRepository::new(self.db).delete(id).await?)
    }

    async fn check_artist_exists(&self, artist_id: Option<i32>) -> Result<(), AppError> {
        let Some(id) = artist_id else {
            return Ok(());
        };

        if UserRepository::new(self.db).find_by_id(id).await?.is_none() {
            return Err(ValidationErrors::single(
                "artist",
                format!("Invalid pk \"{}\" - object does not exist.", id),
            )
            .into());
        }

        Ok(())
    }
}
