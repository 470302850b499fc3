use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_cookies::Cookies;

use crate::{
    model::{
        api::ErrorDto,
        fan_art::{FanArtDto, CreateFanArtDto, UpdateFanArtDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            extract::{JsonBody, PathParam},
        },
        model::fan_art::{CreateFanArtParam, UpdateFanArtParam},
        service::fan_art::FanArtService,
        state::AppState,
    },
};

/// Tag for grouping fan art endpoints in OpenAPI documentation
pub static FAN_ART_TAG: &str = "fan-art";

/// List fan art, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/fanart",
    tag = FAN_ART_TAG,
    responses(
        (status = 200, description = "Fan art entries", body = Vec<FanArtDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_fan_art_entries(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let entries = FanArtService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(entries.into_iter().map(|a| a.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Submit fan art.
///
/// Either `artist` (a registered user) or a non-blank `artist_name` is required.
///
/// # Access Control
/// - `Admin` - Only staff curate the gallery
#[utoipa::path(
    post,
    path = "/api/v1/fanart",
    tag = FAN_ART_TAG,
    request_body = CreateFanArtDto,
    responses(
        (status = 201, description = "Fan art created", body = FanArtDto),
        (status = 400, description = "Invalid fan art data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_fan_art(
    State(state): State<AppState>,
    cookies: Cookies,
    JsonBody(payload): JsonBody<CreateFanArtDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &cookies)
        .require(&[Permission::Admin])
        .await?;

    let param = CreateFanArtParam::from_dto(payload)?;
    let fan_art = FanArtService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(fan_art.into_dto())))
}

/// Get a fan art entry by ID.
#[utoipa::path(
    get,
    path = "/api/v1/fanart/{id}",
    tag = FAN_ART_TAG,
    params(("id" = i32, Path, description = "Fan art ID")),
    responses(
        (status = 200, description = "Fan art", body = FanArtDto),
        (status = 404, description = "Fan art not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_fan_art(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let fan_art = FanArtService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Fan art not found".to_string()))?;

    Ok((StatusCode::OK, Json(fan_art.into_dto())))
}

/// Update a fan art entry.
///
/// The artist rule is checked against the entry as it would be after the update.
///
/// # Access Control
/// - `Admin` - Only staff curate the gallery
#[utoipa::path(
    method(put, patch),
    path = "/api/v1/fanart/{id}",
    tag = FAN_ART_TAG,
    params(("id" = i32, Path, description = "Fan art ID")),
    request_body = UpdateFanArtDto,
    responses(
        (status = 200, description = "Fan art updated", body = FanArtDto),
        (status = 400, description = "Invalid fan art data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 404, description = "Fan art not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_fan_art(
    State(state): State<AppState>,
    cookies: Cookies,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<UpdateFanArtDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &cookies)
        .require(&[Permission::Admin])
        .await?;

    let param = UpdateFanArtParam::from_dto(id, payload)?;
    let fan_art = FanArtService::new(&state.db)
        .update(param)
        .await?
        .ok_or_else(|| AppError::NotFound("Fan art not found".to_string()))?;

    Ok((StatusCode::OK, Json(fan_art.into_dto())))
}

/// Delete a fan art entry.
///
/// # Access Control
/// - `Admin` - Only staff curate the gallery
#[utoipa::path(
    delete,
    path = "/api/v1/fanart/{id}",
    tag = FAN_ART_TAG,
    params(("id" = i32, Path, description = "Fan art ID")),
    responses(
        (status = 204, description = "Fan art deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 404, description = "Fan art not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_fan_art(
    State(state): State<AppState>,
    cookies: Cookies,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &cookies)
        .require(&[Permission::Admin])
        .await?;

    if !FanArtService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound("Fan art not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
