use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tag")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::event_tag::Entity")]
    EventTag,
    #[sea_orm(has_many = "super::fan_fiction_tag::Entity")]
    FanFictionTag,
}

impl Related<super::event_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventTag.def()
    }
}

impl Related<super::fan_fiction_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FanFictionTag.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
