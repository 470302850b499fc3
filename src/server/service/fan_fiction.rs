use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        chapter::ChapterRepository, comment::CommentRepository,
        fan_fiction::FanFictionRepository,
    },
    error::AppError,
    model::{
        comment::CommentParent,
        fan_fiction::{
            CreateFanFictionParam, FanFiction, FanFictionPage, FanFictionQuery,
            UpdateFanFictionParam,
        },
    },
    service::tag::check_tag_ids,
};

pub struct FanFictionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FanFictionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn search(&self, query: &FanFictionQuery) -> Result<FanFictionPage, AppError> {
        Ok(FanFictionRepository::new(self.db).search(query).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<FanFiction>, AppError> {
        Ok(FanFictionRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn create(&self, param: CreateFanFictionParam) -> Result<FanFiction, AppError> {
        let txn = self.db.begin().await?;

        check_tag_ids(&txn, &param.tag_ids).await?;
        let fan_fiction = FanFictionRepository::new(&txn).create(param).await?;

        txn.commit().await?;

        Ok(fan_fiction)
    }

    pub async fn update(&self, param: UpdateFanFictionParam) -> Result<Option<FanFiction>, AppError> {
        let txn = self.db.begin().await?;

        if let Some(tag_ids) = param.tag_ids.as_deref() {
            check_tag_ids(&txn, tag_ids).await?;
        }
        let fan_fiction = FanFictionRepository::new(&txn).update(param).await?;

        txn.commit().await?;

        Ok(fan_fiction)
    }

    /// Deletes the fan-fiction, its chapters and every comment attached to either.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        let chapter_ids = ChapterRepository::new(&txn).ids_by_fan_fiction(id).await?;
        let comment_repo = CommentRepository::new(&txn);
        comment_repo
            .delete_by_parent(CommentParent::CHAPTER, &chapter_ids)
            .await?;
        comment_repo
            .delete_by_parent(CommentParent::FAN_FICTION, &[id])
            .await?;

        let deleted = FanFictionRepository::new(&txn).delete(id).await?;

        txn.commit().await?;

        Ok(deleted)
    }
}
