use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

use super::controller::{
    delete_schedule, get_schedules, get_schedules_by_day, get_schedules_by_group,
    get_schedules_by_teacher, get_teachers, upsert_schedule,
};

pub fn init_schedules_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_schedules))
        .route("/", post(upsert_schedule))
        .route("/teachers", get(get_teachers))
        .route("/day/{day}", get(get_schedules_by_day))
        .route("/teacher/{teacher}", get(get_schedules_by_teacher))
        .route("/group/{group}", get(get_schedules_by_group))
        .route("/{group}/{day}/{time}", delete(delete_schedule))
}
