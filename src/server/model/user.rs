//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        auth::RegisterDto,
        user::{MeDto, UserDto},
    },
    server::{
        error::validation::ValidationErrors,
        util::{password, validate},
    },
};

/// Registered account without its password hash.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    /// Grants write access to curated content.
    pub is_staff: bool,
    pub date_joined: DateTime<Utc>,
}

impl User {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
        }
    }

    /// View returned by `/auth/me`; `name` mirrors the username.
    pub fn into_me_dto(self) -> MeDto {
        MeDto {
            id: self.id,
            email: self.email,
            name: self.username,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            is_staff: entity.is_staff,
            date_joined: entity.date_joined,
        }
    }
}

/// Parameters for creating an account.
///
/// `password` is the plain-text password; it is hashed before it reaches the repository.
#[derive(Debug, Clone)]
pub struct RegisterParam {
    pub username: String,
    pub email: String,
    pub password: String,
    pub is_staff: bool,
}

impl RegisterParam {
    /// Validates the username, e-mail and password policy of a signup request.
    pub fn from_dto(dto: RegisterDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        validate::username(&mut errors, "username", &dto.username);
        validate::email(&mut errors, "email", &dto.email);

        if dto.password.is_empty() {
            errors.add("password", validate::BLANK);
        } else {
            for violation in password::policy_violations(&dto.password, &dto.username, &dto.email)
            {
                errors.add("password", violation);
            }
        }

        errors.into_result()?;

        Ok(Self {
            username: dto.username,
            email: dto.email,
            password: dto.password,
            is_staff: false,
        })
    }
}

/// Row needed to check a login attempt.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}
