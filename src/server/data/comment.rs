//! Comment data repository.
//!
//! Comments reference their parent by `(parent_type, parent_id)` without a foreign
//! key, so cascading deletes are issued explicitly through `delete_by_parent`.

use crate::server::model::comment::{
    Comment, CommentFilter, CreateCommentParam, UpdateCommentParam,
};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct CommentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CommentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets comments oldest first, optionally restricted to one parent.
    pub async fn get_all(&self, filter: CommentFilter) -> Result<Vec<Comment>, DbErr> {
        let mut query = entity::prelude::Comment::find();
        if let Some(parent) = filter.parent {
            query = query
                .filter(entity::comment::Column::ParentType.eq(parent.kind()))
                .filter(entity::comment::Column::ParentId.eq(parent.id()));
        }

        let rows = query
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::comment::Column::CreatedAt)
            .order_by_asc(entity::comment::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(comment, author)| Comment::from_entity(comment, author?))
            .collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Comment>, DbErr> {
        let row = entity::prelude::Comment::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(row.and_then(|(comment, author)| Comment::from_entity(comment, author?)))
    }

    pub async fn create(&self, param: CreateCommentParam) -> Result<Comment, DbErr> {
        let entity = entity::comment::ActiveModel {
            author_id: ActiveValue::Set(param.author_id),
            content: ActiveValue::Set(param.content),
            parent_type: ActiveValue::Set(param.parent.kind().to_string()),
            parent_id: ActiveValue::Set(param.parent.id()),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let id = entity.id;
        self.find_by_id(id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Comment {} not found after insert", id)))
    }

    /// Only the content of a comment is mutable.
    pub async fn update(&self, param: UpdateCommentParam) -> Result<Option<Comment>, DbErr> {
        let Some(comment) = entity::prelude::Comment::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if let Some(content) = param.content {
            let mut active_model: entity::comment::ActiveModel = comment.into();
            active_model.content = ActiveValue::Set(content);
            active_model.update(self.db).await?;
        }

        self.find_by_id(param.id).await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Comment::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every comment attached to any of `parent_ids` of type `parent_type`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted comments
    pub async fn delete_by_parent(
        &self,
        parent_type: &str,
        parent_ids: &[i32],
    ) -> Result<u64, DbErr> {
        if parent_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Comment::delete_many()
            .filter(entity::comment::Column::ParentType.eq(parent_type))
            .filter(entity::comment::Column::ParentId.is_in(parent_ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
