use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_cookies::Cookies;

use crate::{
    model::{
        api::ErrorDto,
        chapter::{ChapterDto, CreateChapterDto, UpdateChapterDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            extract::{JsonBody, PathParam},
        },
        model::chapter::{CreateChapterParam, UpdateChapterParam},
        service::chapter::ChapterService,
        state::AppState,
    },
};

/// Tag for grouping chapter endpoints in OpenAPI documentation
pub static CHAPTER_TAG: &str = "chapter";

/// List the chapters of a fan-fiction in reading order.
#[utoipa::path(
    get,
    path = "/api/v1/fanfiction/{fanfic_id}/chapters",
    tag = CHAPTER_TAG,
    params(("fanfic_id" = i32, Path, description = "Fan-fiction ID")),
    responses(
        (status = 200, description = "Chapters ordered by number", body = Vec<ChapterDto>),
        (status = 404, description = "Fan-fiction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_chapters(
    State(state): State<AppState>,
    PathParam(fanfic_id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let chapters = ChapterService::new(&state.db)
        .list(fanfic_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Fan-fiction not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(chapters.into_iter().map(|c| c.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Append a chapter to a fan-fiction.
///
/// The chapter number is assigned as one past the current highest.
///
/// # Access Control
/// - `FanFictionAuthor` - Only the fan-fiction's author can add chapters
///
/// # Returns
/// - `201 Created` - The created chapter
/// - `400 Bad Request` - Invalid chapter data
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Not the fan-fiction's author
/// - `404 Not Found` - Fan-fiction does not exist
#[utoipa::path(
    post,
    path = "/api/v1/fanfiction/{fanfic_id}/chapters",
    tag = CHAPTER_TAG,
    params(("fanfic_id" = i32, Path, description = "Fan-fiction ID")),
    request_body = CreateChapterDto,
    responses(
        (status = 201, description = "Chapter created", body = ChapterDto),
        (status = 400, description = "Invalid chapter data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the fan-fiction's author", body = ErrorDto),
        (status = 404, description = "Fan-fiction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_chapter(
    State(state): State<AppState>,
    cookies: Cookies,
    PathParam(fanfic_id): PathParam<i32>,
    JsonBody(payload): JsonBody<CreateChapterDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &cookies)
        .require(&[Permission::FanFictionAuthor(fanfic_id)])
        .await?;

    let param = CreateChapterParam::from_dto(fanfic_id, payload)?;
    let chapter = ChapterService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(chapter.into_dto())))
}

/// Get a chapter by ID.
#[utoipa::path(
    get,
    path = "/api/v1/chapters/{id}",
    tag = CHAPTER_TAG,
    params(("id" = i32, Path, description = "Chapter ID")),
    responses(
        (status = 200, description = "Chapter", body = ChapterDto),
        (status = 404, description = "Chapter not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_chapter(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let chapter = ChapterService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Chapter not found".to_string()))?;

    Ok((StatusCode::OK, Json(chapter.into_dto())))
}

/// Update a chapter's title or content. The number cannot change.
///
/// # Access Control
/// - `ChapterAuthor` - Only the fan-fiction's author can edit its chapters
#[utoipa::path(
    method(put, patch),
    path = "/api/v1/chapters/{id}",
    tag = CHAPTER_TAG,
    params(("id" = i32, Path, description = "Chapter ID")),
    request_body = UpdateChapterDto,
    responses(
        (status = 200, description = "Chapter updated", body = ChapterDto),
        (status = 400, description = "Invalid chapter data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the fan-fiction's author", body = ErrorDto),
        (status = 404, description = "Chapter not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_chapter(
    State(state): State<AppState>,
    cookies: Cookies,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<UpdateChapterDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &cookies)
        .require(&[Permission::ChapterAuthor(id)])
        .await?;

    let param = UpdateChapterParam::from_dto(id, payload)?;
    let chapter = ChapterService::new(&state.db)
        .update(param)
        .await?
        .ok_or_else(|| AppError::NotFound("Chapter not found".to_string()))?;

    Ok((StatusCode::OK, Json(chapter.into_dto())))
}

/// Delete a chapter and its comments.
///
/// # Access Control
/// - `ChapterAuthor` - Only the fan-fiction's author can delete its chapters
#[utoipa::path(
    delete,
    path = "/api/v1/chapters/{id}",
    tag = CHAPTER_TAG,
    params(("id" = i32, Path, description = "Chapter ID")),
    responses(
        (status = 204, description = "Chapter deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the fan-fiction's author", body = ErrorDto),
        (status = 404, description = "Chapter not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_chapter(
    State(state): State<AppState>,
    cookies: Cookies,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &cookies)
        .require(&[Permission::ChapterAuthor(id)])
        .await?;

    if !ChapterService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound("Chapter not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
