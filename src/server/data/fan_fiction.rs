//! Fan-fiction data repository.
//!
//! Besides CRUD this repository owns the fan-fiction/tag association table and the
//! free-text search used by the paginated listing.

use std::collections::HashMap;

use crate::server::model::{
    fan_fiction::{
        CreateFanFictionParam, FanFiction, FanFictionPage, FanFictionQuery, UpdateFanFictionParam,
    },
    tag::Tag,
};
use sea_orm::{
    sea_query::LikeExpr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

const LIKE_ESCAPE: char = '\\';

pub struct FanFictionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FanFictionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets one page of fan-fiction matching every search term, newest first.
    ///
    /// Each term must appear (case-insensitively) in the title, the summary, or the
    /// name of an associated tag. An empty term list matches everything.
    ///
    /// # Returns
    /// - `Ok(FanFictionPage)` - The page and the total number of matches
    /// - `Err(DbErr)` - Database error during any of the search queries
    pub async fn search(&self, query: &FanFictionQuery) -> Result<FanFictionPage, DbErr> {
        let mut condition = Condition::all();
        for term in &query.terms {
            condition = condition.add(self.term_condition(term).await?);
        }

        let select = entity::prelude::FanFiction::find().filter(condition);
        let count = select.clone().count(self.db).await?;

        let entities = select
            .order_by_desc(entity::fan_fiction::Column::CreatedAt)
            .order_by_desc(entity::fan_fiction::Column::Id)
            .offset(query.offset)
            .limit(query.limit)
            .all(self.db)
            .await?;

        let results = self.hydrate(entities).await?;

        Ok(FanFictionPage { count, results })
    }

    /// Matches a single term against title, summary and tag names.
    async fn term_condition(&self, term: &str) -> Result<Condition, DbErr> {
        let tag_ids: Vec<i32> = entity::prelude::Tag::find()
            .select_only()
            .column(entity::tag::Column::Id)
            .filter(entity::tag::Column::Name.like(contains_pattern(term)))
            .into_tuple()
            .all(self.db)
            .await?;

        let tagged_ids: Vec<i32> = if tag_ids.is_empty() {
            Vec::new()
        } else {
            entity::prelude::FanFictionTag::find()
                .select_only()
                .column(entity::fan_fiction_tag::Column::FanFictionId)
                .filter(entity::fan_fiction_tag::Column::TagId.is_in(tag_ids))
                .into_tuple()
                .all(self.db)
                .await?
        };

        let mut condition = Condition::any()
            .add(entity::fan_fiction::Column::Title.like(contains_pattern(term)))
            .add(entity::fan_fiction::Column::Summary.like(contains_pattern(term)));
        if !tagged_ids.is_empty() {
            condition = condition.add(entity::fan_fiction::Column::Id.is_in(tagged_ids));
        }

        Ok(condition)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<FanFiction>, DbErr> {
        let Some(entity) = entity::prelude::FanFiction::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.hydrate(vec![entity]).await?.into_iter().next())
    }

    /// Returns the author of fan-fiction `id`, or `None` if it does not exist.
    pub async fn find_author_id(&self, id: i32) -> Result<Option<i32>, DbErr> {
        let author_id: Option<i32> = entity::prelude::FanFiction::find_by_id(id)
            .select_only()
            .column(entity::fan_fiction::Column::AuthorId)
            .into_tuple()
            .one(self.db)
            .await?;

        Ok(author_id)
    }

    /// Inserts the fan-fiction and its tag associations. Run inside a transaction.
    pub async fn create(&self, param: CreateFanFictionParam) -> Result<FanFiction, DbErr> {
        let entity = entity::fan_fiction::ActiveModel {
            author_id: ActiveValue::Set(param.author_id),
            front_page_url: ActiveValue::Set(param.front_page_url),
            title: ActiveValue::Set(param.title),
            summary: ActiveValue::Set(param.summary),
            status: ActiveValue::Set(param.status.as_str().to_string()),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.set_tags(entity.id, &param.tag_ids).await?;

        self.hydrate(vec![entity])
            .await?
            .into_iter()
            .next()
            .ok_or(DbErr::RecordNotFound("Created fan-fiction lost its author".to_string()))
    }

    pub async fn update(&self, param: UpdateFanFictionParam) -> Result<Option<FanFiction>, DbErr> {
        let Some(story) = entity::prelude::FanFiction::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::fan_fiction::ActiveModel = story.into();
        if let Some(title) = param.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(summary) = param.summary {
            active_model.summary = ActiveValue::Set(summary);
        }
        if let Some(status) = param.status {
            active_model.status = ActiveValue::Set(status.as_str().to_string());
        }
        if let Some(front_page_url) = param.front_page_url {
            active_model.front_page_url = ActiveValue::Set(front_page_url);
        }
        let entity = active_model.update(self.db).await?;

        if let Some(tag_ids) = param.tag_ids {
            self.set_tags(entity.id, &tag_ids).await?;
        }

        Ok(self.hydrate(vec![entity]).await?.into_iter().next())
    }

    /// Deletes the fan-fiction; chapters and tag associations cascade.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::FanFiction::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn set_tags(&self, fan_fiction_id: i32, tag_ids: &[i32]) -> Result<(), DbErr> {
        entity::prelude::FanFictionTag::delete_many()
            .filter(entity::fan_fiction_tag::Column::FanFictionId.eq(fan_fiction_id))
            .exec(self.db)
            .await?;

        if tag_ids.is_empty() {
            return Ok(());
        }

        let rows = tag_ids
            .iter()
            .map(|tag_id| entity::fan_fiction_tag::ActiveModel {
                fan_fiction_id: ActiveValue::Set(fan_fiction_id),
                tag_id: ActiveValue::Set(*tag_id),
            });
        entity::prelude::FanFictionTag::insert_many(rows)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Attaches authors and tags to a batch of rows, preserving their order.
    async fn hydrate(
        &self,
        entities: Vec<entity::fan_fiction::Model>,
    ) -> Result<Vec<FanFiction>, DbErr> {
        if entities.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = entities.iter().map(|e| e.id).collect();
        let author_ids: Vec<i32> = entities.iter().map(|e| e.author_id).collect();

        let authors: HashMap<i32, entity::user::Model> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(author_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let mut tags: HashMap<i32, Vec<Tag>> = HashMap::new();
        let links = entity::prelude::FanFictionTag::find()
            .filter(entity::fan_fiction_tag::Column::FanFictionId.is_in(ids))
            .find_also_related(entity::prelude::Tag)
            .order_by_asc(entity::tag::Column::Name)
            .all(self.db)
            .await?;
        for (link, tag) in links {
            if let Some(tag) = tag {
                tags.entry(link.fan_fiction_id)
                    .or_default()
                    .push(Tag::from_entity(tag));
            }
        }

        Ok(entities
            .into_iter()
            .filter_map(|e| {
                let author = authors.get(&e.author_id)?.clone();
                let story_tags = tags.remove(&e.id).unwrap_or_default();
                Some(FanFiction::from_entity(e, author, story_tags))
            })
            .collect())
    }
}

/// Substring pattern matching `term` literally, with `%` and `_` escaped.
fn contains_pattern(term: &str) -> LikeExpr {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');

    LikeExpr::new(pattern).escape(LIKE_ESCAPE)
}
