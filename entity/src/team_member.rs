use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "team_member")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub role: String,
    /// Academic year span such as `2024-25`.
    pub tenure: String,
    pub image_url: Option<String>,
    #[sea_orm(unique)]
    pub institute_email: Option<String>,
    pub instagram_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
