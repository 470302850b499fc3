use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        chapter::ChapterRepository, comment::CommentRepository,
        fan_fiction::FanFictionRepository,
    },
    error::AppError,
    model::{
        chapter::{Chapter, CreateChapterParam, UpdateChapterParam},
        comment::CommentParent,
    },
};

pub struct ChapterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChapterService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Chapters of a fan-fiction ordered by number, or `None` if the fan-fiction doesn't exist.
    pub async fn list(&self, fan_fiction_id: i32) -> Result<Option<Vec<Chapter>>, AppError> {
        let exists = FanFictionRepository::new(self.db)
            .find_author_id(fan_fiction_id)
            .await?
            .is_some();
        if !exists {
            return Ok(None);
        }

        let chapters = ChapterRepository::new(self.db)
            .get_by_fan_fiction(fan_fiction_id)
            .await?;

        Ok(Some(chapters))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Chapter>, AppError> {
        Ok(ChapterRepository::new(self.db).find_by_id(id).await?)
    }

    /// Appends a chapter, numbering it after the current last one.
    ///
    /// The number is read and the row inserted within one transaction.
    pub async fn create(&self, param: CreateChapterParam) -> Result<Chapter, AppError> {
        let txn = self.db.begin().await?;

        let repo = ChapterRepository::new(&txn);
        let number = repo.next_number(param.fan_fiction_id).await?;
        let chapter = repo.create(param, number).await?;

        txn.commit().await?;

        Ok(chapter)
    }

    pub async fn update(&self, param: UpdateChapterParam) -> Result<Option<Chapter>, AppError> {
        Ok(ChapterRepository::new(self.db).update(param).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        CommentRepository::new(&txn)
            .delete_by_parent(CommentParent::CHAPTER, &[id])
            .await?;
        let deleted = ChapterRepository::new(&txn).delete(id).await?;

        txn.commit().await?;

        Ok(deleted)
    }
}
