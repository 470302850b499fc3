use sea_orm::entity::prelude::*;

/// Join row between a fan-fiction and one of its tags.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "fan_fiction_tag")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub fan_fiction_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub tag_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::fan_fiction::Entity",
        from = "Column::FanFictionId",
        to = "super::fan_fiction::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    FanFiction,
    #[sea_orm(
        belongs_to = "super::tag::Entity",
        from = "Column::TagId",
        to = "super::tag::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Tag,
}

impl Related<super::fan_fiction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FanFiction.def()
    }
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tag.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
