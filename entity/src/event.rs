use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub date: Date,
    pub poster_url: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::event_tag::Entity")]
    EventTag,
}

impl Related<super::event_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventTag.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
