use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{
    ChangePasswordRequest, LoginRequest, LoginResponse, MessageResponse, PublicUser,
    RegisterRequest, UserResponse,
};
use crate::modules::groups::model::{CreateGroupRequest, Group, GroupData, GroupResponse};
use crate::modules::schedules::model::{Day, Schedule, ScheduleResponse, UpsertScheduleRequest};
use crate::modules::users::model::{Role, User};
use crate::router::HealthResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login,
        crate::modules::auth::controller::register,
        crate::modules::auth::controller::verify,
        crate::modules::auth::controller::logout,
        crate::modules::auth::controller::change_password,
        crate::modules::groups::controller::get_groups,
        crate::modules::groups::controller::create_group,
        crate::modules::groups::controller::delete_group,
        crate::modules::schedules::controller::get_schedules,
        crate::modules::schedules::controller::upsert_schedule,
        crate::modules::schedules::controller::delete_schedule,
        crate::modules::schedules::controller::get_schedules_by_day,
        crate::modules::schedules::controller::get_schedules_by_teacher,
        crate::modules::schedules::controller::get_schedules_by_group,
        crate::modules::schedules::controller::get_teachers,
        crate::router::health,
    ),
    components(
        schemas(
            User,
            Role,
            PublicUser,
            LoginRequest,
            LoginResponse,
            RegisterRequest,
            ChangePasswordRequest,
            UserResponse,
            MessageResponse,
            ErrorResponse,
            Group,
            CreateGroupRequest,
            GroupData,
            GroupResponse,
            Day,
            Schedule,
            UpsertScheduleRequest,
            ScheduleResponse,
            HealthResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login, registration, and session endpoints"),
        (name = "Groups", description = "Student group management"),
        (name = "Schedules", description = "Class schedule management"),
        (name = "Health", description = "Service health")
    ),
    info(
        title = "Lectern API",
        version = "0.1.0",
        description = "A REST API for managing university class schedules, built with Rust, Axum, and PostgreSQL with JWT-based authentication.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
