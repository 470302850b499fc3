use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        blog_post::BlogPostRepository, chapter::ChapterRepository, comment::CommentRepository,
        fan_fiction::FanFictionRepository,
    },
    error::{validation::ValidationErrors, AppError},
    model::comment::{Comment, CommentFilter, CommentParent, CreateCommentParam, UpdateCommentParam},
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self, filter: CommentFilter) -> Result<Vec<Comment>, AppError> {
        Ok(CommentRepository::new(self.db).get_all(filter).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Comment>, AppError> {
        Ok(CommentRepository::new(self.db).find_by_id(id).await?)
    }

    /// Creates a comment once its parent is confirmed to exist and be visible to the author.
    ///
    /// The parent check and the insert share one transaction, so a parent deleted
    /// concurrently cannot leave the comment orphaned.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The created comment
    /// - `Err(AppError::Validation(_))` - Parent missing, or a private blog post of someone else
    pub async fn create(&self, param: CreateCommentParam) -> Result<Comment, AppError> {
        let txn = self.db.begin().await?;

        if !parent_visible(&txn, param.parent, param.author_id).await? {
            return Err(ValidationErrors::single(
                "parent_id",
                format!("Parent {} does not exist.", param.parent),
            )
            .into());
        }

        let comment = CommentRepository::new(&txn).create(param).await?;
        txn.commit().await?;

        Ok(comment)
    }

    pub async fn update(&self, param: UpdateCommentParam) -> Result<Option<Comment>, AppError> {
        Ok(CommentRepository::new(self.db).update(param).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(CommentRepository::new(self.db).delete(id).await?)
    }
}

/// Whether `parent` exists and, for a blog post, is public or written by `author_id`.
async fn parent_visible<C: ConnectionTrait>(
    db: &C,
    parent: CommentParent,
    author_id: i32,
) -> Result<bool, AppError> {
    let visible = match parent {
        CommentParent::Blog(id) => BlogPostRepository::new(db)
            .find_by_id(id)
            .await?
            .is_some_and(|post| post.is_public || post.author_id == author_id),
        CommentParent::FanFiction(id) => FanFictionRepository::new(db)
            .find_author_id(id)
            .await?
            .is_some(),
        CommentParent::Chapter(id) => ChapterRepository::new(db)
            .find_by_id(id)
            .await?
            .is_some(),
    };

    Ok(visible)
}
