use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_cookies::Cookies;

use crate::{
    model::{
        api::ErrorDto,
        team_member::{CreateTeamMemberDto, TeamMemberDto, UpdateTeamMemberDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            extract::{JsonBody, PathParam},
        },
        model::team_member::{CreateTeamMemberParam, UpdateTeamMemberParam},
        service::team_member::TeamMemberService,
        state::AppState,
    },
};

/// Tag for grouping team member endpoints in OpenAPI documentation
pub static TEAM_MEMBER_TAG: &str = "team-member";

/// List all team members ordered by name.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/v1/team-members",
    tag = TEAM_MEMBER_TAG,
    responses(
        (status = 200, description = "Team members", body = Vec<TeamMemberDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team_members(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let members = TeamMemberService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(members.into_iter().map(|m| m.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Add a team member.
///
/// # Access Control
/// - `Admin` - Only staff can manage the team roster
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `cookies` - Request cookies carrying the access token
/// - `payload` - Member data
///
/// # Returns
/// - `201 Created` - The created member
/// - `400 Bad Request` - Invalid data or institute e-mail already used
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Not staff
#[utoipa::path(
    post,
    path = "/api/v1/team-members",
    tag = TEAM_MEMBER_TAG,
    request_body = CreateTeamMemberDto,
    responses(
        (status = 201, description = "Team member created", body = TeamMemberDto),
        (status = 400, description = "Invalid team member data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_team_member(
    State(state): State<AppState>,
    cookies: Cookies,
    JsonBody(payload): JsonBody<CreateTeamMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &cookies)
        .require(&[Permission::Admin])
        .await?;

    let param = CreateTeamMemberParam::from_dto(payload)?;
    let member = TeamMemberService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(member.into_dto())))
}

/// Get a team member by ID.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/v1/team-members/{id}",
    tag = TEAM_MEMBER_TAG,
    params(("id" = i32, Path, description = "Team member ID")),
    responses(
        (status = 200, description = "Team member", body = TeamMemberDto),
        (status = 404, description = "Team member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team_member(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let member = TeamMemberService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Team member not found".to_string()))?;

    Ok((StatusCode::OK, Json(member.into_dto())))
}

/// Update a team member. Omitted fields keep their values.
///
/// # Access Control
/// - `Admin` - Only staff can manage the team roster
#[utoipa::path(
    method(put, patch),
    path = "/api/v1/team-members/{id}",
    tag = TEAM_MEMBER_TAG,
    params(("id" = i32, Path, description = "Team member ID")),
    request_body = UpdateTeamMemberDto,
    responses(
        (status = 200, description = "Team member updated", body = TeamMemberDto),
        (status = 400, description = "Invalid team member data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 404, description = "Team member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_team_member(
    State(state): State<AppState>,
    cookies: Cookies,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<UpdateTeamMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &cookies)
        .require(&[Permission::Admin])
        .await?;

    let param = UpdateTeamMemberParam::from_dto(id, payload)?;
    let member = TeamMemberService::new(&state.db)
        .update(param)
        .await?
        .ok_or_else(|| AppError::NotFound("Team member not found".to_string()))?;

    Ok((StatusCode::OK, Json(member.into_dto())))
}

/// Remove a team member.
///
/// # Access Control
/// - `Admin` - Only staff can manage the team roster
#[utoipa::path(
    delete,
    path = "/api/v1/team-members/{id}",
    tag = TEAM_MEMBER_TAG,
    params(("id" = i32, Path, description = "Team member ID")),
    responses(
        (status = 204, description = "Team member deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 404, description = "Team member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_team_member(
    State(state): State<AppState>,
    cookies: Cookies,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &cookies)
        .require(&[Permission::Admin])
        .await?;

    if !TeamMemberService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound("Team member not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
