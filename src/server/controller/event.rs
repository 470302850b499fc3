use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_cookies::Cookies;

use crate::{
    model::{
        api::ErrorDto,
        event::{EventDto, CreateEventDto, UpdateEventDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            extract::{JsonBody, PathParam},
        },
        model::event::{CreateEventParam, UpdateEventParam},
        service::event::EventService,
        state::AppState,
    },
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

/// List events, most recent date first, with their tags.
#[utoipa::path(
    get,
    path = "/api/v1/events",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "Events", body = Vec<EventDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let events = EventService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(events.into_iter().map(|e| e.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Create an event.
///
/// `tag_ids` are resolved to tag associations in the same transaction as the
/// event row.
///
/// # Access Control
/// - `Admin` - Only staff can schedule events
///
/// # Returns
/// - `201 Created` - The created event with its tags
/// - `400 Bad Request` - Invalid data or an unknown tag id
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Not staff
#[utoipa::path(
    post,
    path = "/api/v1/events",
    tag = EVENT_TAG,
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Event created", body = EventDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    cookies: Cookies,
    JsonBody(payload): JsonBody<CreateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &cookies)
        .require(&[Permission::Admin])
        .await?;

    let param = CreateEventParam::from_dto(payload)?;
    let event = EventService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(event.into_dto())))
}

/// Get an event by ID.
#[utoipa::path(
    get,
    path = "/api/v1/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Event", body = EventDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let event = EventService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

/// Update an event. A present `tag_ids` replaces all tags.
///
/// # Access Control
/// - `Admin` - Only staff can edit events
#[utoipa::path(
    method(put, patch),
    path = "/api/v1/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    request_body = UpdateEventDto,
    responses(
        (status = 200, description = "Event updated", body = EventDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    cookies: Cookies,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<UpdateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &cookies)
        .require(&[Permission::Admin])
        .await?;

    let param = UpdateEventParam::from_dto(id, payload)?;
    let event = EventService::new(&state.db)
        .update(param)
        .await?
        .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

/// Delete an event.
///
/// # Access Control
/// - `Admin` - Only staff can delete events
#[utoipa::path(
    delete,
    path = "/api/v1/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    cookies: Cookies,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &cookies)
        .require(&[Permission::Admin])
        .await?;

    if !EventService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound("Event not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
