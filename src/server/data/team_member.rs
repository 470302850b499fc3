use crate::server::model::team_member::{CreateTeamMemberParam, TeamMember, UpdateTeamMemberParam};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct TeamMemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamMemberRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every team member ordered by name.
    pub async fn get_all(&self) -> Result<Vec<TeamMember>, DbErr> {
        let entities = entity::prelude::TeamMember::find()
            .order_by_asc(entity::team_member::Column::Name)
            .order_by_asc(entity::team_member::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(TeamMember::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<TeamMember>, DbErr> {
        let entity = entity::prelude::TeamMember::find_by_id(id).one(self.db).await?;

        Ok(entity.map(TeamMember::from_entity))
    }

    pub async fn create(&self, param: CreateTeamMemberParam) -> Result<TeamMember, DbErr> {
        let entity = entity::team_member::ActiveModel {
            name: ActiveValue::Set(param.name),
            role: ActiveValue::Set(param.role),
            tenure: ActiveValue::Set(param.tenure),
            image_url: ActiveValue::Set(param.image_url),
            institute_email: ActiveValue::Set(param.institute_email),
            instagram_url: ActiveValue::Set(param.instagram_url),
            linkedin_url: ActiveValue::Set(param.linkedin_url),
            is_active: ActiveValue::Set(param.is_active),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(TeamMember::from_entity(entity))
    }

    /// Applies the supplied fields and leaves the rest unchanged.
    ///
    /// # Returns
    /// - `Ok(Some(TeamMember))` - The updated member
    /// - `Ok(None)` - No member with that id
    pub async fn update(&self, param: UpdateTeamMemberParam) -> Result<Option<TeamMember>, DbErr> {
        let Some(member) = entity::prelude::TeamMember::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::team_member::ActiveModel = member.into();
        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(role) = param.role {
            active_model.role = ActiveValue::Set(role);
        }
        if let Some(tenure) = param.tenure {
            active_model.tenure = ActiveValue::Set(tenure);
        }
        if let Some(image_url) = param.image_url {
            active_model.image_url = ActiveValue::Set(image_url);
        }
        if let Some(institute_email) = param.institute_email {
            active_model.institute_email = ActiveValue::Set(institute_email);
        }
        if let Some(instagram_url) = param.instagram_url {
            active_model.instagram_url = ActiveValue::Set(instagram_url);
        }
        if let Some(linkedin_url) = param.linkedin_url {
            active_model.linkedin_url = ActiveValue::Set(linkedin_url);
        }
        if let Some(is_active) = param.is_active {
            active_model.is_active = ActiveValue::Set(is_active);
        }

        let entity = active_model.update(self.db).await?;

        Ok(Some(TeamMember::from_entity(entity)))
    }

    /// Returns `false` when no row was deleted.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::TeamMember::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether another member already uses `email`.
    pub async fn institute_email_taken(
        &self,
        email: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::TeamMember::find()
            .filter(entity::team_member::Column::InstituteEmail.eq(email));
        if let Some(id) = exclude_id {
            query = query.filter(entity::team_member::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }
}
