use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_cookies::Cookies;

use crate::{
    model::{
        api::ErrorDto,
        blog_post::{BlogPostDto, CreateBlogPostDto, UpdateBlogPostDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            extract::{JsonBody, PathParam},
        },
        model::blog_post::{CreateBlogPostParam, UpdateBlogPostParam},
        service::blog_post::BlogPostService,
        state::AppState,
    },
};

/// Tag for grouping blog post endpoints in OpenAPI documentation
pub static BLOG_POST_TAG: &str = "blog-post";

/// List blog posts visible to the caller.
///
/// Returns every public post plus the caller's own private posts, newest first.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/v1/blog-posts",
    tag = BLOG_POST_TAG,
    responses(
        (status = 200, description = "Visible blog posts", body = Vec<BlogPostDto>),
        (status = 401, description = "Invalid access token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_blog_posts(
    State(state): State<AppState>,
    cookies: Cookies,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &state.jwt, &cookies).current().await?;

    let posts = BlogPostService::new(&state.db)
        .get_visible(viewer.map(|u| u.id))
        .await?;

    Ok((
        StatusCode::OK,
        Json(posts.into_iter().map(|p| p.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Write a blog post as the caller.
///
/// # Access Control
/// - Authenticated - The caller becomes the author
///
/// # Returns
/// - `201 Created` - The created post
/// - `400 Bad Request` - Invalid post data
/// - `401 Unauthorized` - Not authenticated
#[utoipa::path(
    post,
    path = "/api/v1/blog-posts",
    tag = BLOG_POST_TAG,
    request_body = CreateBlogPostDto,
    responses(
        (status = 201, description = "Blog post created", body = BlogPostDto),
        (status = 400, description = "Invalid blog post data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_blog_post(
    State(state): State<AppState>,
    cookies: Cookies,
    JsonBody(payload): JsonBody<CreateBlogPostDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &cookies)
        .require(&[])
        .await?;

    let param = CreateBlogPostParam::from_dto(user.id, payload)?;
    let post = BlogPostService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(post.into_dto())))
}

/// Get a blog post by ID.
///
/// A private post is reported as missing to anyone but its author, so its
/// existence is not leaked.
#[utoipa::path(
    get,
    path = "/api/v1/blog-posts/{id}",
    tag = BLOG_POST_TAG,
    params(("id" = i32, Path, description = "Blog post ID")),
    responses(
        (status = 200, description = "Blog post", body = BlogPostDto),
        (status = 401, description = "Invalid access token", body = ErrorDto),
        (status = 404, description = "Blog post not found or private", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_blog_post(
    State(state): State<AppState>,
    cookies: Cookies,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &state.jwt, &cookies).current().await?;

    let post = BlogPostService::new(&state.db)
        .get_by_id(id, viewer.map(|u| u.id))
        .await?
        .ok_or_else(|| AppError::NotFound("Blog post not found".to_string()))?;

    Ok((StatusCode::OK, Json(post.into_dto())))
}

/// Update a blog post. Omitted fields keep their values.
///
/// # Access Control
/// - `BlogPostAuthor` - Only the author can edit the post
#[utoipa::path(
    method(put, patch),
    path = "/api/v1/blog-posts/{id}",
    tag = BLOG_POST_TAG,
    params(("id" = i32, Path, description = "Blog post ID")),
    request_body = UpdateBlogPostDto,
    responses(
        (status = 200, description = "Blog post updated", body = BlogPostDto),
        (status = 400, description = "Invalid blog post data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Blog post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_blog_post(
    State(state): State<AppState>,
    cookies: Cookies,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<UpdateBlogPostDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &cookies)
        .require(&[Permission::BlogPostAuthor(id)])
        .await?;

    let param = UpdateBlogPostParam::from_dto(id, payload)?;
    let post = BlogPostService::new(&state.db)
        .update(param)
        .await?
        .ok_or_else(|| AppError::NotFound("Blog post not found".to_string()))?;

    Ok((StatusCode::OK, Json(post.into_dto())))
}

/// Delete a blog post and its comments.
///
/// # Access Control
/// - `BlogPostAuthor` - Only the author can delete the post
#[utoipa::path(
    delete,
    path = "/api/v1/blog-posts/{id}",
    tag = BLOG_POST_TAG,
    params(("id" = i32, Path, description = "Blog post ID")),
    responses(
        (status = 204, description = "Blog post deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Blog post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_blog_post(
    State(state): State<AppState>,
    cookies: Cookies,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &cookies)
        .require(&[Permission::BlogPostAuthor(id)])
        .await?;

    if !BlogPostService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound("Blog post not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
