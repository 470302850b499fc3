use sea_orm::entity::prelude::*;

/// Registered identity able to log in.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub email: String,
    /// Argon2 PHC string.
    pub password_hash: String,
    pub is_staff: bool,
    pub date_joined: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::blacklisted_token::Entity")]
    BlacklistedToken,
    #[sea_orm(has_many = "super::blog_post::Entity")]
    BlogPost,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
    #[sea_orm(has_many = "super::fan_art::Entity")]
    FanArt,
    #[sea_orm(has_many = "super::fan_fiction::Entity")]
    FanFiction,
}

impl Related<super::blacklisted_token::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BlacklistedToken.def()
    }
}

impl Related<super::blog_post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BlogPost.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl Related<super::fan_art::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FanArt.def()
    }
}

impl Related<super::fan_fiction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FanFiction.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
