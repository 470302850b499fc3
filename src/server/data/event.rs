//! Event data repository, including the event/tag association table.

use std::collections::HashMap;

use crate::server::model::{
    event::{CreateEventParam, Event, UpdateEventParam},
    tag::Tag,
};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every event with its tags, latest date first.
    pub async fn get_all(&self) -> Result<Vec<Event>, DbErr> {
        let entities = entity::prelude::Event::find()
            .order_by_desc(entity::event::Column::Date)
            .order_by_desc(entity::event::Column::Id)
            .all(self.db)
            .await?;

        let ids: Vec<i32> = entities.iter().map(|e| e.id).collect();
        let mut tags = self.tags_by_event(&ids).await?;

        Ok(entities
            .into_iter()
            .map(|e| {
                let event_tags = tags.remove(&e.id).unwrap_or_default();
                Event::from_entity(e, event_tags)
            })
            .collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Event>, DbErr> {
        let Some(entity) = entity::prelude::Event::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let tags = self.tags_by_event(&[id]).await?.remove(&id).unwrap_or_default();

        Ok(Some(Event::from_entity(entity, tags)))
    }

    /// Inserts the event row and its tag associations.
    ///
    /// Tag ids must already be known to exist. Call inside a transaction so a
    /// failed association does not leave a tagless event behind.
    pub async fn create(&self, param: CreateEventParam) -> Result<Event, DbErr> {
        let entity = entity::event::ActiveModel {
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            date: ActiveValue::Set(param.date),
            poster_url: ActiveValue::Set(param.poster_url),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.set_tags(entity.id, &param.tag_ids).await?;
        let tags = self
            .tags_by_event(&[entity.id])
            .await?
            .remove(&entity.id)
            .unwrap_or_default();

        Ok(Event::from_entity(entity, tags))
    }

    pub async fn update(&self, param: UpdateEventParam) -> Result<Option<Event>, DbErr> {
        let Some(event) = entity::prelude::Event::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::event::ActiveModel = event.into();
        if let Some(title) = param.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(description) = param.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(date) = param.date {
            active_model.date = ActiveValue::Set(date);
        }
        if let Some(poster_url) = param.poster_url {
            active_model.poster_url = ActiveValue::Set(poster_url);
        }
        let entity = active_model.update(self.db).await?;

        if let Some(tag_ids) = param.tag_ids {
            self.set_tags(entity.id, &tag_ids).await?;
        }
        let tags = self
            .tags_by_event(&[entity.id])
            .await?
            .remove(&entity.id)
            .unwrap_or_default();

        Ok(Some(Event::from_entity(entity, tags)))
    }

    /// Deletes the event; its tag associations cascade.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Event::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Replaces every tag association of `event_id`.
    async fn set_tags(&self, event_id: i32, tag_ids: &[i32]) -> Result<(), DbErr> {
        entity::prelude::EventTag::delete_many()
            .filter(entity::event_tag::Column::EventId.eq(event_id))
            .exec(self.db)
            .await?;

        if tag_ids.is_empty() {
            return Ok(());
        }

        let rows = tag_ids.iter().map(|tag_id| entity::event_tag::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            tag_id: ActiveValue::Set(*tag_id),
        });
        entity::prelude::EventTag::insert_many(rows)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Loads tags for several events at once, keyed by event id and sorted by name.
    async fn tags_by_event(&self, event_ids: &[i32]) -> Result<HashMap<i32, Vec<Tag>>, DbErr> {
        let mut by_event: HashMap<i32, Vec<Tag>> = HashMap::new();
        if event_ids.is_empty() {
            return Ok(by_event);
        }

        let rows = entity::prelude::EventTag::find()
            .filter(entity::event_tag::Column::EventId.is_in(event_ids.iter().copied()))
            .find_also_related(entity::prelude::Tag)
            .order_by_asc(entity::tag::Column::Name)
            .all(self.db)
            .await?;

        for (link, tag) in rows {
            if let Some(tag) = tag {
                by_event
                    .entry(link.event_id)
                    .or_default()
                    .push(Tag::from_entity(tag));
            }
        }

        Ok(by_event)
    }
}
