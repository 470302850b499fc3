use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{blog_post::BlogPostRepository, comment::CommentRepository},
    error::AppError,
    model::{
        blog_post::{BlogPost, CreateBlogPostParam, UpdateBlogPostParam},
        comment::CommentParent,
    },
};

pub struct BlogPostService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BlogPostService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Public posts plus every post written by `viewer_id`.
    pub async fn get_visible(&self, viewer_id: Option<i32>) -> Result<Vec<BlogPost>, AppError> {
        Ok(BlogPostRepository::new(self.db).get_visible(viewer_id).await?)
    }

    /// Gets a post as seen by `viewer_id`.
    ///
    /// A private post is reported as missing to anyone but its author.
    pub async fn get_by_id(
        &self,
        id: i32,
        viewer_id: Option<i32>,
    ) -> Result<Option<BlogPost>, AppError> {
        let post = BlogPostRepository::new(self.db).find_by_id(id).await?;

        Ok(post.filter(|p| p.is_public || Some(p.author_id) == viewer_id))
    }

    pub async fn create(&self, param: CreateBlogPostParam) -> Result<BlogPost, AppError> {
        Ok(BlogPostRepository::new(self.db).create(param).await?)
    }

    pub async fn update(&self, param: UpdateBlogPostParam) -> Result<Option<BlogPost>, AppError> {
        Ok(BlogPostRepository::new(self.db).update(param).await?)
    }

    /// Deletes the post together with its comments.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        CommentRepository::new(&txn)
            .delete_by_parent(CommentParent::BLOG, &[id])
            .await?;
        let deleted = BlogPostRepository::new(&txn).delete(id).await?;

        txn.commit().await?;

        Ok(deleted)
    }
}
