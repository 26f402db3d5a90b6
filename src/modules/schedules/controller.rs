use std::collections::BTreeMap;

use axum::Json;
use axum::extract::{Path, State};
use tracing::instrument;

use crate::middleware::role::RequireAdmin;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::MessageResponse;
use crate::modules::groups::service::GroupService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{Schedule, ScheduleResponse, UpsertScheduleRequest};
use super::service::ScheduleService;

/// All schedules as a map keyed by "{group}-{day}-{time}"
#[utoipa::path(
    get,
    path = "/api/schedules",
    responses(
        (status = 200, description = "Schedules keyed by group-day-time", body = BTreeMap<String, Schedule>)
    ),
    tag = "Schedules"
)]
#[instrument(skip(state))]
pub async fn get_schedules(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, Schedule>>, AppError> {
    let schedules = ScheduleService::get_all(&state.db).await?;

    let map = schedules
        .into_iter()
        .map(|schedule| (schedule.map_key(), schedule))
        .collect();

    Ok(Json(map))
}

/// Create or update the entry at (group, day, time) (admin only)
#[utoipa::path(
    post,
    path = "/api/schedules",
    request_body = UpsertScheduleRequest,
    responses(
        (status = 200, description = "Entry created or updated", body = ScheduleResponse),
        (status = 400, description = "Validation failed or group does not exist", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Requires admin role", body = ErrorResponse)
    ),
    tag = "Schedules",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn upsert_schedule(
    State(state): State<AppState>,
    RequireAdmin(_auth_user): RequireAdmin,
    ValidatedJson(dto): ValidatedJson<UpsertScheduleRequest>,
) -> Result<Json<ScheduleResponse>, AppError> {
    if !GroupService::exists(&state.db, &dto.group).await? {
        return Err(AppError::bad_request(anyhow::anyhow!(
            "Group does not exist"
        )));
    }

    // Blank teacher/room mean "unset", same as omitting them.
    let teacher = dto.teacher.as_deref().filter(|t| !t.is_empty());
    let room = dto.room.as_deref().filter(|r| !r.is_empty());

    let schedule = ScheduleService::upsert(
        &state.db,
        &dto.group,
        dto.day,
        &dto.time,
        &dto.course,
        teacher,
        room,
    )
    .await?;

    Ok(Json(ScheduleResponse {
        success: true,
        data: schedule,
    }))
}

/// Delete the entry at (group, day, time) (admin only)
#[utoipa::path(
    delete,
    path = "/api/schedules/{group}/{day}/{time}",
    params(
        ("group" = String, Path, description = "Group name"),
        ("day" = String, Path, description = "Day of week"),
        ("time" = String, Path, description = "Time slot, e.g. 08:00")
    ),
    responses(
        (status = 200, description = "Entry deleted", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Requires admin role", body = ErrorResponse),
        (status = 404, description = "No entry at that key", body = ErrorResponse)
    ),
    tag = "Schedules",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_schedule(
    State(state): State<AppState>,
    RequireAdmin(_auth_user): RequireAdmin,
    Path((group, day, time)): Path<(String, String, String)>,
) -> Result<Json<MessageResponse>, AppError> {
    ScheduleService::delete(&state.db, &group, &day, &time)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Schedule entry not found")))?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Schedule deleted successfully".to_string(),
    }))
}

/// Schedules for one day
#[utoipa::path(
    get,
    path = "/api/schedules/day/{day}",
    params(("day" = String, Path, description = "Day of week")),
    responses(
        (status = 200, description = "Entries ordered by time then group", body = Vec<Schedule>)
    ),
    tag = "Schedules"
)]
#[instrument(skip(state))]
pub async fn get_schedules_by_day(
    State(state): State<AppState>,
    Path(day): Path<String>,
) -> Result<Json<Vec<Schedule>>, AppError> {
    let schedules = ScheduleService::get_by_day(&state.db, &day).await?;
    Ok(Json(schedules))
}

/// Schedules for one teacher
#[utoipa::path(
    get,
    path = "/api/schedules/teacher/{teacher}",
    params(("teacher" = String, Path, description = "Teacher name")),
    responses(
        (status = 200, description = "Entries ordered by day then time", body = Vec<Schedule>)
    ),
    tag = "Schedules"
)]
#[instrument(skip(state))]
pub async fn get_schedules_by_teacher(
    State(state): State<AppState>,
    Path(teacher): Path<String>,
) -> Result<Json<Vec<Schedule>>, AppError> {
    let schedules = ScheduleService::get_by_teacher(&state.db, &teacher).await?;
    Ok(Json(schedules))
}

/// Schedules for one group
#[utoipa::path(
    get,
    path = "/api/schedules/group/{group}",
    params(("group" = String, Path, description = "Group name")),
    responses(
        (status = 200, description = "Entries ordered by day then time", body = Vec<Schedule>)
    ),
    tag = "Schedules"
)]
#[instrument(skip(state))]
pub async fn get_schedules_by_group(
    State(state): State<AppState>,
    Path(group): Path<String>,
) -> Result<Json<Vec<Schedule>>, AppError> {
    let schedules = ScheduleService::get_by_group(&state.db, &group).await?;
    Ok(Json(schedules))
}

/// Distinct teacher names across all schedules
#[utoipa::path(
    get,
    path = "/api/schedules/teachers",
    responses(
        (status = 200, description = "Alphabetical list of teacher names", body = Vec<String>)
    ),
    tag = "Schedules"
)]
#[instrument(skip(state))]
pub async fn get_teachers(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    let teachers = ScheduleService::get_teachers(&state.db).await?;
    Ok(Json(teachers))
}
