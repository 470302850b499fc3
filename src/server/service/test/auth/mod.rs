use crate::{
    model::auth::LoginDto,
    server::{
        error::{auth::AuthError, AppError},
        model::user::RegisterParam,
        service::{
            auth::AuthService,
            token::{JwtKeys, TokenType},
        },
    },
};
use sea_orm::DatabaseConnection;
use test_utils::builder::TestBuilder;

mod login;
mod refresh;
mod register;

const PASSWORD: &str = "kaguya-sama-2024";

fn keys() -> JwtKeys {
    JwtKeys::from_secret("auth-service-test-secret")
}

fn register_param(username: &str) -> RegisterParam {
    RegisterParam {
        username: username.to_string(),
        email: format!("{}@example.com", username),
        password: PASSWORD.to_string(),
        is_staff: false,
    }
}

fn login_dto(username: &str, password: &str) -> LoginDto {
    LoginDto {
        username: username.to_string(),
        password: password.to_string(),
    }
}

/// Registers `username` and logs in, returning the refresh token.
async fn logged_in_refresh_token(
    db: &DatabaseConnection,
    keys: &JwtKeys,
    username: &str,
) -> Result<String, AppError> {
    let service = AuthService::new(db, keys);
    service.register(register_param(username)).await?;
    let (_, pair) = service.login(login_dto(username, PASSWORD)).await?;

    Ok(pair.refresh.token)
}
