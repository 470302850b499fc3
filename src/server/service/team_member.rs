use sea_orm::DatabaseConnection;

use crate::server::{
    data::team_member::TeamMemberRepository,
    error::{validation::ValidationErrors, AppError},
    model::team_member::{CreateTeamMemberParam, TeamMember, UpdateTeamMemberParam},
};

const EMAIL_TAKEN: &str = "team member with this institute email already exists.";

pub struct TeamMemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamMemberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<TeamMember>, AppError> {
        Ok(TeamMemberRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<TeamMember>, AppError> {
        Ok(TeamMemberRepository::new(self.db).find_by_id(id).await?)
    }

    /// Creates a team member, rejecting a duplicate institute e-mail.
    pub async fn create(&self, param: CreateTeamMemberParam) -> Result<TeamMember, AppError> {
        let repo = TeamMemberRepository::new(self.db);

        if let Some(email) = param.institute_email.as_deref() {
            if repo.institute_email_taken(email, None).await? {
                return Err(ValidationErrors::single("institute_email", EMAIL_TAKEN).into());
            }
        }

        Ok(repo.create(param).await?)
    }

    /// Returns `None` if the member doesn't exist.
    pub async fn update(
        &self,
        param: UpdateTeamMemberParam,
    ) -> Result<Option<TeamMember>, AppError> {
        let repo = TeamMemberRepository::new(self.db);

        if let Some(Some(email)) = param.institute_email.as_ref() {
            if repo.institute_email_taken(email, Some(param.id)).await? {
                return Err(ValidationErrors::single("institute_email", EMAIL_TAKEN).into());
            }
        }

        Ok(repo.update(param).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(TeamMemberRepository::new(self.db).delete(id).await?)
    }
}
