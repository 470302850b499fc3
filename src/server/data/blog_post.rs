//! Blog post data repository.

use crate::server::model::blog_post::{BlogPost, CreateBlogPostParam, UpdateBlogPostParam};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct BlogPostRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BlogPostRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the posts visible to `viewer_id`, newest first.
    ///
    /// Anonymous viewers see public posts; authenticated viewers also see their own
    /// private posts.
    ///
    /// # Arguments
    /// - `viewer_id` - ID of the calling user, `None` for anonymous callers
    pub async fn get_visible(&self, viewer_id: Option<i32>) -> Result<Vec<BlogPost>, DbErr> {
        let mut visibility =
            Condition::any().add(entity::blog_post::Column::IsPublic.eq(true));
        if let Some(id) = viewer_id {
            visibility = visibility.add(entity::blog_post::Column::AuthorId.eq(id));
        }

        let rows = entity::prelude::BlogPost::find()
            .filter(visibility)
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::blog_post::Column::CreatedAt)
            .order_by_desc(entity::blog_post::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(post, author)| author.map(|a| BlogPost::from_entity(post, a)))
            .collect())
    }

    /// Finds a post regardless of visibility; callers apply the visibility rule.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<BlogPost>, DbErr> {
        let row = entity::prelude::BlogPost::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(row.and_then(|(post, author)| author.map(|a| BlogPost::from_entity(post, a))))
    }

    pub async fn create(&self, param: CreateBlogPostParam) -> Result<BlogPost, DbErr> {
        let now = chrono::Utc::now();
        let entity = entity::blog_post::ActiveModel {
            author_id: ActiveValue::Set(param.author_id),
            title: ActiveValue::Set(param.title),
            content: ActiveValue::Set(param.content),
            is_public: ActiveValue::Set(param.is_public),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.with_author(entity).await
    }

    /// Applies the supplied fields and bumps `updated_at`.
    pub async fn update(&self, param: UpdateBlogPostParam) -> Result<Option<BlogPost>, DbErr> {
        let Some(post) = entity::prelude::BlogPost::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::blog_post::ActiveModel = post.into();
        if let Some(title) = param.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(content) = param.content {
            active_model.content = ActiveValue::Set(content);
        }
        if let Some(is_public) = param.is_public {
            active_model.is_public = ActiveValue::Set(is_public);
        }
        active_model.updated_at = ActiveValue::Set(chrono::Utc::now());
        let entity = active_model.update(self.db).await?;

        self.with_author(entity).await.map(Some)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::BlogPost::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn with_author(&self, entity: entity::blog_post::Model) -> Result<BlogPost, DbErr> {
        let author = entity::prelude::User::find_by_id(entity.author_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Author {} of blog post {} not found",
                entity.author_id, entity.id
            )))?;

        Ok(BlogPost::from_entity(entity, author))
    }
}
