use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_cookies::Cookies;

use crate::{
    model::{
        api::ErrorDto,
        seasonal_report::{SeasonalReportDto, CreateSeasonalReportDto, UpdateSeasonalReportDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            extract::{JsonBody, PathParam},
        },
        model::seasonal_report::{CreateSeasonalReportParam, UpdateSeasonalReportParam},
        service::seasonal_report::SeasonalReportService,
        state::AppState,
    },
};

/// Tag for grouping seasonal report endpoints in OpenAPI documentation
pub static SEASONAL_REPORT_TAG: &str = "seasonal-report";

/// List seasonal reports, most recently published first.
#[utoipa::path(
    get,
    path = "/api/v1/seasonal-reports",
    tag = SEASONAL_REPORT_TAG,
    responses(
        (status = 200, description = "Seasonal reports", body = Vec<SeasonalReportDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_seasonal_reports(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let reports = SeasonalReportService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(reports.into_iter().map(|r| r.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Publish a seasonal report.
///
/// # Access Control
/// - `Admin` - Only staff publish reports
#[utoipa::path(
    post,
    path = "/api/v1/seasonal-reports",
    tag = SEASONAL_REPORT_TAG,
    request_body = CreateSeasonalReportDto,
    responses(
        (status = 201, description = "Seasonal report created", body = SeasonalReportDto),
        (status = 400, description = "Invalid seasonal report data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_seasonal_report(
    State(state): State<AppState>,
    cookies: Cookies,
    JsonBody(payload): JsonBody<CreateSeasonalReportDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &cookies)
        .require(&[Permission::Admin])
        .await?;

    let param = CreateSeasonalReportParam::from_dto(payload)?;
    let report = SeasonalReportService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(report.into_dto())))
}

/// Get a seasonal report by ID.
#[utoipa::path(
    get,
    path = "/api/v1/seasonal-reports/{id}",
    tag = SEASONAL_REPORT_TAG,
    params(("id" = i32, Path, description = "Seasonal report ID")),
    responses(
        (status = 200, description = "Seasonal report", body = SeasonalReportDto),
        (status = 404, description = "Seasonal report not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_seasonal_report(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let report = SeasonalReportService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Seasonal report not found".to_string()))?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}

/// Update a seasonal report.
///
/// # Access Control
/// - `Admin` - Only staff edit reports
#[utoipa::path(
    method(put, patch),
    path = "/api/v1/seasonal-reports/{id}",
    tag = SEASONAL_REPORT_TAG,
    params(("id" = i32, Path, description = "Seasonal report ID")),
    request_body = UpdateSeasonalReportDto,
    responses(
        (status = 200, description = "Seasonal report updated", body = SeasonalReportDto),
        (status = 400, description = "Invalid seasonal report data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 404, description = "Seasonal report not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_seasonal_report(
    State(state): State<AppState>,
    cookies: Cookies,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<UpdateSeasonalReportDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &cookies)
        .require(&[Permission::Admin])
        .await?;

    let param = UpdateSeasonalReportParam::from_dto(id, payload)?;
    let report = SeasonalReportService::new(&state.db)
        .update(param)
        .await?
        .ok_or_else(|| AppError::NotFound("Seasonal report not found".to_string()))?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}

/// Delete a seasonal report.
///
/// # Access Control
/// - `Admin` - Only staff delete reports
#[utoipa::path(
    delete,
    path = "/api/v1/seasonal-reports/{id}",
    tag = SEASONAL_REPORT_TAG,
    params(("id" = i32, Path, description = "Seasonal report ID")),
    responses(
        (status = 204, description = "Seasonal report deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 404, description = "Seasonal report not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_seasonal_report(
    State(state): State<AppState>,
    cookies: Cookies,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &cookies)
        .require(&[Permission::Admin])
        .await?;

    if !SeasonalReportService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound("Seasonal report not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
