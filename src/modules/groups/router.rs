use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

use super::controller::{create_group, delete_group, get_groups};

pub fn init_groups_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_groups))
        .route("/", post(create_group))
        .route("/{name}", delete(delete_group))
}
