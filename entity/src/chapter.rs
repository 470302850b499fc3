use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "chapter")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub fan_fiction_id: i32,
    /// Unique per fan-fiction, assigned as max + 1.
    pub chapter_number: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub published_at: DateTimeUtc,
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
}

impl Related<super::fan_fiction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FanFiction.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
