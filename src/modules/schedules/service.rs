use sqlx::PgPool;
use tracing::instrument;

use crate::modules::schedules::model::{Day, Schedule};
use crate::utils::errors::AppError;

const SCHEDULE_COLUMNS: &str =
    "id, group_name, day, time, course, teacher, room, created_at, updated_at";

pub struct ScheduleService;

impl ScheduleService {
    #[instrument(skip(db))]
    pub async fn get_all(db: &PgPool) -> Result<Vec<Schedule>, AppError> {
        let schedules = sqlx::query_as::<_, Schedule>(&format!(
            "SELECT {SCHEDULE_COLUMNS} FROM schedules ORDER BY group_name, day, time"
        ))
        .fetch_all(db)
        .await?;

        Ok(schedules)
    }

    /// Atomic insert-or-update on the (group_name, day, time) key.
    ///
    /// `id` and `created_at` survive an overwrite; `updated_at` is refreshed.
    /// Concurrent writes to one slot serialize on the conflict clause, so no
    /// read-then-branch is needed here.
    #[instrument(skip(db))]
    pub async fn upsert(
        db: &PgPool,
        group: &str,
        day: Day,
        time: &str,
        course: &str,
        teacher: Option<&str>,
        room: Option<&str>,
    ) -> Result<Schedule, AppError> {
        let schedule = sqlx::query_as::<_, Schedule>(&format!(
            r#"INSERT INTO schedules (group_name, day, time, course, teacher, room)
               VALUES ($1, $2, $3, $4, $5, $6)
               ON CONFLICT (group_name, day, time)
               DO UPDATE SET course = EXCLUDED.course,
                             teacher = EXCLUDED.teacher,
                             room = EXCLUDED.room,
                             updated_at = NOW()
               RETURNING {SCHEDULE_COLUMNS}"#
        ))
        .bind(group)
        .bind(day.as_str())
        .bind(time)
        .bind(course)
        .bind(teacher)
        .bind(room)
        .fetch_one(db)
        .await
        .map_err(|e| {
            // A delete racing this write can make the group vanish between
            // the caller's existence check and the insert.
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_foreign_key_violation()
            {
                return AppError::bad_request(anyhow::anyhow!("Group does not exist"));
            }
            AppError::from(e)
        })?;

        Ok(schedule)
    }

    #[instrument(skip(db))]
    pub async fn delete(
        db: &PgPool,
        group: &str,
        day: &str,
        time: &str,
    ) -> Result<Option<Schedule>, AppError> {
        let schedule = sqlx::query_as::<_, Schedule>(&format!(
            r#"DELETE FROM schedules
               WHERE group_name = $1 AND day = $2 AND time = $3
               RETURNING {SCHEDULE_COLUMNS}"#
        ))
        .bind(group)
        .bind(day)
        .bind(time)
        .fetch_optional(db)
        .await?;

        Ok(schedule)
    }

    #[instrument(skip(db))]
    pub async fn delete_by_group(db: &PgPool, group: &str) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM schedules WHERE group_name = $1")
            .bind(group)
            .execute(db)
            .await?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(db))]
    pub async fn get_by_day(db: &PgPool, day: &str) -> Result<Vec<Schedule>, AppError> {
        let schedules = sqlx::query_as::<_, Schedule>(&format!(
            "SELECT {SCHEDULE_COLUMNS} FROM schedules WHERE day = $1 ORDER BY time, group_name"
        ))
        .bind(day)
        .fetch_all(db)
        .await?;

        Ok(schedules)
    }

    #[instrument(skip(db))]
    pub async fn get_by_teacher(db: &PgPool, teacher: &str) -> Result<Vec<Schedule>, AppError> {
        let schedules = sqlx::query_as::<_, Schedule>(&format!(
            "SELECT {SCHEDULE_COLUMNS} FROM schedules WHERE teacher = $1 ORDER BY day, time"
        ))
        .bind(teacher)
        .fetch_all(db)
        .await?;

        Ok(schedules)
    }

    #[instrument(skip(db))]
    pub async fn get_by_group(db: &PgPool, group: &str) -> Result<Vec<Schedule>, AppError> {
        let schedules = sqlx::query_as::<_, Schedule>(&format!(
            "SELECT {SCHEDULE_COLUMNS} FROM schedules WHERE group_name = $1 ORDER BY day, time"
        ))
        .bind(group)
        .fetch_all(db)
        .await?;

        Ok(schedules)
    }

    /// Distinct non-empty teacher names, alphabetical.
    #[instrument(skip(db))]
    pub async fn get_teachers(db: &PgPool) -> Result<Vec<String>, AppError> {
        let teachers = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT teacher FROM schedules
             WHERE teacher IS NOT NULL AND teacher != ''
             ORDER BY teacher",
        )
        .fetch_all(db)
        .await?;

        Ok(teachers)
    }
}
