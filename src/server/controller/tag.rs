use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_cookies::Cookies;

use crate::{
    model::{
        api::ErrorDto,
        tag::{TagDto, CreateTagDto, UpdateTagDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            extract::{JsonBody, PathParam},
        },
        model::tag::{CreateTagParam, UpdateTagParam},
        service::tag::TagService,
        state::AppState,
    },
};

/// Tag for grouping tag endpoints in OpenAPI documentation
pub static TAG_TAG: &str = "tag";

/// List all tags ordered by name.
#[utoipa::path(
    get,
    path = "/api/v1/tags",
    tag = TAG_TAG,
    responses(
        (status = 200, description = "Tags", body = Vec<TagDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tags(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let tags = TagService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(tags.into_iter().map(|t| t.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Create a tag.
///
/// The slug is derived from the name when it is omitted or blank. Name and slug
/// must both be unused.
///
/// # Access Control
/// - `Admin` - Only staff can manage tags
///
/// # Returns
/// - `201 Created` - The created tag
/// - `400 Bad Request` - Invalid name or slug, or either already used
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Not staff
#[utoipa::path(
    post,
    path = "/api/v1/tags",
    tag = TAG_TAG,
    request_body = CreateTagDto,
    responses(
        (status = 201, description = "Tag created", body = TagDto),
        (status = 400, description = "Invalid tag data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_tag(
    State(state): State<AppState>,
    cookies: Cookies,
    JsonBody(payload): JsonBody<CreateTagDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &cookies)
        .require(&[Permission::Admin])
        .await?;

    let param = CreateTagParam::from_dto(payload)?;
    let tag = TagService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(tag.into_dto())))
}

/// Get a tag by ID.
#[utoipa::path(
    get,
    path = "/api/v1/tags/{id}",
    tag = TAG_TAG,
    params(("id" = i32, Path, description = "Tag ID")),
    responses(
        (status = 200, description = "Tag", body = TagDto),
        (status = 404, description = "Tag not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tag(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let tag = TagService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Tag not found".to_string()))?;

    Ok((StatusCode::OK, Json(tag.into_dto())))
}

/// Update a tag.
///
/// An omitted slug is kept even when the name changes; a blank slug is derived
/// again from the resulting name.
///
/// # Access Control
/// - `Admin` - Only staff can manage tags
#[utoipa::path(
    method(put, patch),
    path = "/api/v1/tags/{id}",
    tag = TAG_TAG,
    params(("id" = i32, Path, description = "Tag ID")),
    request_body = UpdateTagDto,
    responses(
        (status = 200, description = "Tag updated", body = TagDto),
        (status = 400, description = "Invalid tag data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 404, description = "Tag not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_tag(
    State(state): State<AppState>,
    cookies: Cookies,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<UpdateTagDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &cookies)
        .require(&[Permission::Admin])
        .await?;

    let param = UpdateTagParam::from_dto(id, payload)?;
    let tag = TagService::new(&state.db)
        .update(param)
        .await?
        .ok_or_else(|| AppError::NotFound("Tag not found".to_string()))?;

    Ok((StatusCode::OK, Json(tag.into_dto())))
}

/// Delete a tag, detaching it from every event and fan-fiction.
///
/// # Access Control
/// - `Admin` - Only staff can manage tags
#[utoipa::path(
    delete,
    path = "/api/v1/tags/{id}",
    tag = TAG_TAG,
    params(("id" = i32, Path, description = "Tag ID")),
    responses(
        (status = 204, description = "Tag deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 404, description = "Tag not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_tag(
    State(state): State<AppState>,
    cookies: Cookies,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &cookies)
        .require(&[Permission::Admin])
        .await?;

    if !TagService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound("Tag not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
