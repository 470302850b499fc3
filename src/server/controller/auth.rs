use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_cookies::Cookies;

use crate::{
    model::{
        api::{DetailDto, ErrorDto},
        auth::{LoginDto, RegisterDto},
        user::{MeDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::AuthGuard,
            cookie::AuthCookies,
            extract::JsonBody,
        },
        model::user::RegisterParam,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Create an account.
///
/// Open to anyone and rate limited per client IP. The new account never has
/// staff status and is not logged in.
///
/// # Returns
/// - `201 Created` - The new account
/// - `400 Bad Request` - Invalid username, e-mail or password, or username taken
/// - `429 Too Many Requests` - Signup rate limit exceeded
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 429, description = "Too many signups from this address"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = RegisterParam::from_dto(payload)?;

    let user = AuthService::new(&state.db, &state.jwt).register(param).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Log in with username and password.
///
/// On success the access and refresh tokens are set as `HttpOnly` cookies; the body
/// only acknowledges the login.
///
/// # Returns
/// - `200 OK` - Cookies set
/// - `400 Bad Request` - Username or password missing
/// - `401 Unauthorized` - Wrong credentials
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in, cookies set", body = DetailDto),
        (status = 400, description = "Missing credentials", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    cookies: Cookies,
    JsonBody(payload): JsonBody<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let (_, pair) = AuthService::new(&state.db, &state.jwt).login(payload).await?;

    AuthCookies::new(&cookies, state.cookie_policy).set_tokens(&pair);

    Ok((StatusCode::OK, Json(DetailDto::new("Login successful"))))
}

/// Exchange the refresh cookie for a new token pair.
///
/// The presented refresh token is blacklisted, so it cannot be used twice.
#[utoipa::path(
    post,
    path = "/api/v1/auth/refresh",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "New cookies set", body = DetailDto),
        (status = 401, description = "Missing, invalid, expired or revoked refresh token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn refresh(
    State(state): State<AppState>,
    cookies: Cookies,
) -> Result<impl IntoResponse, AppError> {
    let auth_cookies = AuthCookies::new(&cookies, state.cookie_policy);
    let refresh_token = auth_cookies.refresh_token();

    let pair = AuthService::new(&state.db, &state.jwt)
        .refresh(refresh_token.as_deref())
        .await?;

    auth_cookies.set_tokens(&pair);

    Ok((StatusCode::OK, Json(DetailDto::new("Token refreshed"))))
}

/// Log out.
///
/// Revokes the refresh cookie if it is still valid and always clears both cookies.
#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Cookies cleared", body = DetailDto)
    ),
)]
pub async fn logout(State(state): State<AppState>, cookies: Cookies) -> impl IntoResponse {
    let auth_cookies = AuthCookies::new(&cookies, state.cookie_policy);
    let refresh_token = auth_cookies.refresh_token();

    AuthService::new(&state.db, &state.jwt)
        .logout(refresh_token.as_deref())
        .await;

    auth_cookies.clear();

    (StatusCode::OK, Json(DetailDto::new("Logged out")))
}

/// Get the identity behind the access cookie.
///
/// # Returns
/// - `200 OK` - Id, e-mail and name of the caller
/// - `401 Unauthorized` - No or invalid access cookie
#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current identity", body = MeDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    cookies: Cookies,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &cookies)
        .require(&[])
        .await?;

    Ok((StatusCode::OK, Json(user.into_me_dto())))
}
