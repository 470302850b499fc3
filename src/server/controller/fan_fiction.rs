use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_cookies::Cookies;

use crate::{
    model::{
        api::ErrorDto,
        fan_fiction::{
            CreateFanFictionDto, FanFictionDto, FanFictionQueryDto, PaginatedFanFictionDto,
            UpdateFanFictionDto,
        },
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            extract::{JsonBody, PathParam, QueryParams},
        },
        model::fan_fiction::{CreateFanFictionParam, FanFictionQuery, UpdateFanFictionParam},
        service::fan_fiction::FanFictionService,
        state::AppState,
    },
};

/// Tag for grouping fan-fiction endpoints in OpenAPI documentation
pub static FAN_FICTION_TAG: &str = "fan-fiction";

/// Search fan-fiction.
///
/// Every whitespace or comma separated term of `search` must match the title, the
/// summary or one of the tag names. Results are newest first and paginated with
/// `limit` (default 10, at most 20) and `offset`.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - One page of results with links to the neighbouring pages
#[utoipa::path(
    get,
    path = "/api/v1/fanfiction",
    tag = FAN_FICTION_TAG,
    params(FanFictionQueryDto),
    responses(
        (status = 200, description = "One page of fan-fiction", body = PaginatedFanFictionDto),
        (status = 400, description = "Malformed query string", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_fan_fictions(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<FanFictionQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let query = FanFictionQuery::from_dto(params);

    let page = FanFictionService::new(&state.db).search(&query).await?;

    Ok((StatusCode::OK, Json(page.into_dto(&query))))
}

/// Start a fan-fiction as the caller.
///
/// # Access Control
/// - Authenticated - The caller becomes the author
#[utoipa::path(
    post,
    path = "/api/v1/fanfiction",
    tag = FAN_FICTION_TAG,
    request_body = CreateFanFictionDto,
    responses(
        (status = 201, description = "Fan-fiction created", body = FanFictionDto),
        (status = 400, description = "Invalid fan-fiction data or unknown tag", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_fan_fiction(
    State(state): State<AppState>,
    cookies: Cookies,
    JsonBody(payload): JsonBody<CreateFanFictionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &cookies)
        .require(&[])
        .await?;

    let param = CreateFanFictionParam::from_dto(user.id, payload)?;
    let fan_fiction = FanFictionService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(fan_fiction.into_dto())))
}

/// Get a fan-fiction by ID.
#[utoipa::path(
    get,
    path = "/api/v1/fanfiction/{id}",
    tag = FAN_FICTION_TAG,
    params(("id" = i32, Path, description = "Fan-fiction ID")),
    responses(
        (status = 200, description = "Fan-fiction", body = FanFictionDto),
        (status = 404, description = "Fan-fiction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_fan_fiction(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let fan_fiction = FanFictionService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Fan-fiction not found".to_string()))?;

    Ok((StatusCode::OK, Json(fan_fiction.into_dto())))
}

/// Update a fan-fiction.
///
/// A present `tag_ids` replaces every tag. An empty `front_page_url` clears it.
///
/// # Access Control
/// - `FanFictionAuthor` - Only the author can edit the fan-fiction
#[utoipa::path(
    method(put, patch),
    path = "/api/v1/fanfiction/{id}",
    tag = FAN_FICTION_TAG,
    params(("id" = i32, Path, description = "Fan-fiction ID")),
    request_body = UpdateFanFictionDto,
    responses(
        (status = 200, description = "Fan-fiction updated", body = FanFictionDto),
        (status = 400, description = "Invalid fan-fiction data or unknown tag", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Fan-fiction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_fan_fiction(
    State(state): State<AppState>,
    cookies: Cookies,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<UpdateFanFictionDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &cookies)
        .require(&[Permission::FanFictionAuthor(id)])
        .await?;

    let param = UpdateFanFictionParam::from_dto(id, payload)?;
    let fan_fiction = FanFictionService::new(&state.db)
        .update(param)
        .await?
        .ok_or_else(|| AppError::NotFound("Fan-fiction not found".to_string()))?;

    Ok((StatusCode::OK, Json(fan_fiction.into_dto())))
}

/// Delete a fan-fiction with its chapters and every comment on either.
///
/// # Access Control
/// - `FanFictionAuthor` - Only the author can delete the fan-fiction
#[utoipa::path(
    delete,
    path = "/api/v1/fanfiction/{id}",
    tag = FAN_FICTION_TAG,
    params(("id" = i32, Path, description = "Fan-fiction ID")),
    responses(
        (status = 204, description = "Fan-fiction deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Fan-fiction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_fan_fiction(
    State(state): State<AppState>,
    cookies: Cookies,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &cookies)
        .require(&[Permission::FanFictionAuthor(id)])
        .await?;

    if !FanFictionService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound("Fan-fiction not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
