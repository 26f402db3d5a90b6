use sqlx::PgPool;
use tracing::instrument;

use crate::modules::groups::model::Group;
use crate::utils::errors::AppError;

pub struct GroupService;

impl GroupService {
    #[instrument(skip(db))]
    pub async fn get_all(db: &PgPool) -> Result<Vec<String>, AppError> {
        let names = sqlx::query_scalar::<_, String>("SELECT name FROM groups ORDER BY name")
            .fetch_all(db)
            .await?;

        Ok(names)
    }

    #[instrument(skip(db))]
    pub async fn exists(db: &PgPool, name: &str) -> Result<bool, AppError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM groups WHERE name = $1)")
                .bind(name)
                .fetch_one(db)
                .await?;

        Ok(exists)
    }

    /// The unique constraint on `name` backstops callers whose existence
    /// pre-check raced another create.
    #[instrument(skip(db))]
    pub async fn create(db: &PgPool, name: &str) -> Result<Group, AppError> {
        let group = sqlx::query_as::<_, Group>(
            "INSERT INTO groups (name) VALUES ($1) RETURNING id, name, created_at",
        )
        .bind(name)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return AppError::conflict(anyhow::anyhow!("Group already exists"));
            }
            AppError::from(e)
        })?;

        Ok(group)
    }

    /// Returns the deleted group, or `None` when nothing matched. Schedule
    /// cleanup is the caller's job (the FK cascade also covers it).
    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, name: &str) -> Result<Option<Group>, AppError> {
        let group = sqlx::query_as::<_, Group>(
            "DELETE FROM groups WHERE name = $1 RETURNING id, name, created_at",
        )
        .bind(name)
        .fetch_optional(db)
        .await?;

        Ok(group)
    }
}
