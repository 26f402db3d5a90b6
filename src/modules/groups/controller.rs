use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;

use crate::middleware::role::RequireAdmin;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::MessageResponse;
use crate::modules::schedules::service::ScheduleService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{CreateGroupRequest, GroupData, GroupResponse};
use super::service::GroupService;

/// List group names
#[utoipa::path(
    get,
    path = "/api/groups",
    responses(
        (status = 200, description = "Group names in lexicographic order", body = Vec<String>)
    ),
    tag = "Groups"
)]
#[instrument(skip(state))]
pub async fn get_groups(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    let groups = GroupService::get_all(&state.db).await?;
    Ok(Json(groups))
}

/// Create a group (admin only)
#[utoipa::path(
    post,
    path = "/api/groups",
    request_body = CreateGroupRequest,
    responses(
        (status = 201, description = "Group created", body = GroupResponse),
        (status = 400, description = "Group already exists or name invalid", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Requires admin role", body = ErrorResponse)
    ),
    tag = "Groups",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn create_group(
    State(state): State<AppState>,
    RequireAdmin(_auth_user): RequireAdmin,
    ValidatedJson(dto): ValidatedJson<CreateGroupRequest>,
) -> Result<(StatusCode, Json<GroupResponse>), AppError> {
    if GroupService::exists(&state.db, &dto.name).await? {
        return Err(AppError::bad_request(anyhow::anyhow!(
            "Group already exists"
        )));
    }

    let group = GroupService::create(&state.db, &dto.name).await?;

    Ok((
        StatusCode::CREATED,
        Json(GroupResponse {
            success: true,
            data: GroupData {
                id: group.id,
                name: group.name,
            },
        }),
    ))
}

/// Delete a group and all of its schedules (admin only)
#[utoipa::path(
    delete,
    path = "/api/groups/{name}",
    params(("name" = String, Path, description = "Group name")),
    responses(
        (status = 200, description = "Group and schedules deleted", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Requires admin role", body = ErrorResponse),
        (status = 404, description = "Group not found", body = ErrorResponse)
    ),
    tag = "Groups",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_group(
    State(state): State<AppState>,
    RequireAdmin(_auth_user): RequireAdmin,
    Path(name): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    // Explicit schedule cleanup first; the ON DELETE CASCADE on the foreign
    // key would also handle rows created between these two statements.
    ScheduleService::delete_by_group(&state.db, &name).await?;

    GroupService::delete(&state.db, &name)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Group not found")))?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Group and associated schedules deleted successfully".to_string(),
    }))
}
