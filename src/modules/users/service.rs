use sqlx::PgPool;
use tracing::instrument;

use crate::modules::users::model::{Role, User, UserWithPassword};
use crate::utils::errors::AppError;
use crate::utils::password::hash_password;

pub struct UserService;

impl UserService {
    #[instrument(skip(db))]
    pub async fn find_by_username(
        db: &PgPool,
        username: &str,
    ) -> Result<Option<UserWithPassword>, AppError> {
        let user = sqlx::query_as::<_, UserWithPassword>(
            "SELECT id, username, password_hash, role FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(db)
        .await?;

        Ok(user)
    }

    #[instrument(skip(db))]
    pub async fn find_by_id(db: &PgPool, id: i32) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, role, created_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await?;

        Ok(user)
    }

    /// Hashes the password and inserts the user. The unique constraint on
    /// `username` is the backstop for concurrent registrations that pass the
    /// caller's existence pre-check.
    #[instrument(skip(db, password))]
    pub async fn create(
        db: &PgPool,
        username: &str,
        password: &str,
        role: Role,
    ) -> Result<User, AppError> {
        let password_hash = hash_password(password)?;

        let user = sqlx::query_as::<_, User>(
            r#"INSERT INTO users (username, password_hash, role)
               VALUES ($1, $2, $3)
               RETURNING id, username, role, created_at"#,
        )
        .bind(username)
        .bind(&password_hash)
        .bind(role.as_str())
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return AppError::conflict(anyhow::anyhow!("Username already exists"));
            }
            AppError::from(e)
        })?;

        Ok(user)
    }

    #[instrument(skip(db, new_password))]
    pub async fn update_password(
        db: &PgPool,
        id: i32,
        new_password: &str,
    ) -> Result<(), AppError> {
        let password_hash = hash_password(new_password)?;

        let result = sqlx::query(
            "UPDATE users SET password_hash = $1, updated_at = NOW() WHERE id = $2",
        )
        .bind(&password_hash)
        .bind(id)
        .execute(db)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("User not found")));
        }

        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn get_all(db: &PgPool) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, username, role, created_at FROM users ORDER BY created_at DESC",
        )
        .fetch_all(db)
        .await?;

        Ok(users)
    }

    /// No route currently deletes users.
    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: i32) -> Result<Option<i32>, AppError> {
        let deleted = sqlx::query_scalar::<_, i32>("DELETE FROM users WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(db)
            .await?;

        Ok(deleted)
    }
}
