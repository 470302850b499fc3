use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_cookies::Cookies;

use crate::{
    model::{
        announcement::{AnnouncementDto, CreateAnnouncementDto, UpdateAnnouncementDto},
        api::ErrorDto,
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            extract::{JsonBody, PathParam},
        },
        model::announcement::{CreateAnnouncementParam, UpdateAnnouncementParam},
        service::announcement::AnnouncementService,
        state::AppState,
    },
};

/// Tag for grouping announcement endpoints in OpenAPI documentation
pub static ANNOUNCEMENT_TAG: &str = "announcement";

/// List announcements by priority, newest first within a priority.
///
/// Staff see every announcement; everyone else only sees active ones.
#[utoipa::path(
    get,
    path = "/api/v1/announcements",
    tag = ANNOUNCEMENT_TAG,
    responses(
        (status = 200, description = "Announcements", body = Vec<AnnouncementDto>),
        (status = 401, description = "Invalid access token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_announcements(
    State(state): State<AppState>,
    cookies: Cookies,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &state.jwt, &cookies).current().await?;
    let is_staff = viewer.is_some_and(|u| u.is_staff);

    let announcements = AnnouncementService::new(&state.db).get_all(is_staff).await?;

    Ok((
        StatusCode::OK,
        Json(
            announcements
                .into_iter()
                .map(|a| a.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Publish an announcement.
///
/// # Access Control
/// - `Admin` - Only staff can publish announcements
#[utoipa::path(
    post,
    path = "/api/v1/announcements",
    tag = ANNOUNCEMENT_TAG,
    request_body = CreateAnnouncementDto,
    responses(
        (status = 201, description = "Announcement created", body = AnnouncementDto),
        (status = 400, description = "Invalid announcement data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_announcement(
    State(state): State<AppState>,
    cookies: Cookies,
    JsonBody(payload): JsonBody<CreateAnnouncementDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &cookies)
        .require(&[Permission::Admin])
        .await?;

    let param = CreateAnnouncementParam::from_dto(payload)?;
    let announcement = AnnouncementService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(announcement.into_dto())))
}

/// Get an announcement by ID.
///
/// An inactive announcement is reported as missing to non-staff callers.
#[utoipa::path(
    get,
    path = "/api/v1/announcements/{id}",
    tag = ANNOUNCEMENT_TAG,
    params(("id" = i32, Path, description = "Announcement ID")),
    responses(
        (status = 200, description = "Announcement", body = AnnouncementDto),
        (status = 401, description = "Invalid access token", body = ErrorDto),
        (status = 404, description = "Announcement not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_announcement(
    State(state): State<AppState>,
    cookies: Cookies,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &state.jwt, &cookies).current().await?;
    let is_staff = viewer.is_some_and(|u| u.is_staff);

    let announcement = AnnouncementService::new(&state.db)
        .get_by_id(id, is_staff)
        .await?
        .ok_or_else(|| AppError::NotFound("Announcement not found".to_string()))?;

    Ok((StatusCode::OK, Json(announcement.into_dto())))
}

/// Update an announcement. Omitted fields keep their values.
///
/// # Access Control
/// - `Admin` - Only staff can edit announcements
#[utoipa::path(
    method(put, patch),
    path = "/api/v1/announcements/{id}",
    tag = ANNOUNCEMENT_TAG,
    params(("id" = i32, Path, description = "Announcement ID")),
    request_body = UpdateAnnouncementDto,
    responses(
        (status = 200, description = "Announcement updated", body = AnnouncementDto),
        (status = 400, description = "Invalid announcement data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 404, description = "Announcement not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_announcement(
    State(state): State<AppState>,
    cookies: Cookies,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<UpdateAnnouncementDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &cookies)
        .require(&[Permission::Admin])
        .await?;

    let param = UpdateAnnouncementParam::from_dto(id, payload)?;
    let announcement = AnnouncementService::new(&state.db)
        .update(param)
        .await?
        .ok_or_else(|| AppError::NotFound("Announcement not found".to_string()))?;

    Ok((StatusCode::OK, Json(announcement.into_dto())))
}

/// Delete an announcement.
///
/// # Access Control
/// - `Admin` - Only staff can delete announcements
#[utoipa::path(
    delete,
    path = "/api/v1/announcements/{id}",
    tag = ANNOUNCEMENT_TAG,
    params(("id" = i32, Path, description = "Announcement ID")),
    responses(
        (status = 204, description = "Announcement deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 404, description = "Announcement not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_announcement(
    State(state): State<AppState>,
    cookies: Cookies,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &cookies)
        .require(&[Permission::Admin])
        .await?;

    if !AnnouncementService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound("Announcement not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
