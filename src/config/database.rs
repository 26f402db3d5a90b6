//! PostgreSQL connection pool initialization.
//!
//! The pool is created once at startup and handed to [`crate::state::AppState`];
//! handlers never reach for a process-wide connection.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::env;

/// Connects to the database named by `DATABASE_URL`.
///
/// # Panics
///
/// Panics if `DATABASE_URL` is unset or the connection fails; there is no
/// useful way to serve requests without a database.
pub async fn init_db_pool() -> PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(10);

    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database")
}
