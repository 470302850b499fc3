use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_cookies::Cookies;

use crate::{
    model::{
        api::ErrorDto,
        comment::{CommentDto, CommentQueryDto, CreateCommentDto, UpdateCommentDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            extract::{JsonBody, PathParam, QueryParams},
        },
        model::comment::{CommentFilter, CreateCommentParam, UpdateCommentParam},
        service::comment::CommentService,
        state::AppState,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

/// List comments, oldest first.
///
/// Filters by parent only when both `parent_type` and `parent_id` are given.
#[utoipa::path(
    get,
    path = "/api/v1/comments",
    tag = COMMENT_TAG,
    params(CommentQueryDto),
    responses(
        (status = 200, description = "Comments", body = Vec<CommentDto>),
        (status = 400, description = "Unknown parent type", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comments(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<CommentQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let filter = CommentFilter::from_dto(params)?;

    let comments = CommentService::new(&state.db).get_all(filter).await?;

    Ok((
        StatusCode::OK,
        Json(comments.into_iter().map(|c| c.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Comment on a blog post, fan-fiction or chapter as the caller.
///
/// # Access Control
/// - Authenticated - The caller becomes the author
///
/// # Returns
/// - `201 Created` - The created comment
/// - `400 Bad Request` - Invalid content, unknown parent type, missing parent, or a
///   private blog post of another user
/// - `401 Unauthorized` - Not authenticated
#[utoipa::path(
    post,
    path = "/api/v1/comments",
    tag = COMMENT_TAG,
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment created", body = CommentDto),
        (status = 400, description = "Invalid comment or parent", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    cookies: Cookies,
    JsonBody(payload): JsonBody<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &cookies)
        .require(&[])
        .await?;

    let param = CreateCommentParam::from_dto(user.id, payload)?;
    let comment = CommentService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/v1/comments/{id}",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Comment ID")),
    responses(
        (status = 200, description = "Comment", body = CommentDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comment(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let comment = CommentService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;

    Ok((StatusCode::OK, Json(comment.into_dto())))
}

/// Edit a comment's content. The parent cannot change.
///
/// # Access Control
/// - `CommentAuthor` - Only the author can edit the comment
#[utoipa::path(
    method(put, patch),
    path = "/api/v1/comments/{id}",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Comment ID")),
    request_body = UpdateCommentDto,
    responses(
        (status = 200, description = "Comment updated", body = CommentDto),
        (status = 400, description = "Invalid content", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_comment(
    State(state): State<AppState>,
    cookies: Cookies,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<UpdateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &cookies)
        .require(&[Permission::CommentAuthor(id)])
        .await?;

    let param = UpdateCommentParam::from_dto(id, payload)?;
    let comment = CommentService::new(&state.db)
        .update(param)
        .await?
        .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;

    Ok((StatusCode::OK, Json(comment.into_dto())))
}

/// Delete a comment.
///
/// # Access Control
/// - `CommentAuthor` - Only the author can delete the comment
#[utoipa::path(
    delete,
    path = "/api/v1/comments/{id}",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Comment ID")),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    cookies: Cookies,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &cookies)
        .require(&[Permission::CommentAuthor(id)])
        .await?;

    if !CommentService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound("Comment not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
