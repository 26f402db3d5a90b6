use sqlx::PgPool;
use tracing::info;

use crate::utils::password::hash_password;

const UNIVERSITY_GROUPS: &[&str] = &[
    "COMSE-25",
    "COMCEH-25",
    "COMFCI-25",
    "COMCEH-24",
    "COMSE-24",
    "COMFCI-24",
    "COMSEH-23",
    "COMSE-23/1-Group",
    "COMSE-23/2-Group",
    "COMFCI-23",
    "COM-22/1-Group",
    "COM-22/2-Group",
    "MATDAIS-25",
    "MATMIE-25",
    "MATDAIS-24",
    "MATMIE-24",
    "MATDAIS-23",
    "MATMIE-23",
    "MATH-22",
    "EEAIR-25",
    "IEMIT-25",
    "EEAIR-24",
    "IEMIT-24",
    "EEAIR-23",
    "IEMIT-23",
];

struct SampleSchedule {
    group: &'static str,
    day: &'static str,
    time: &'static str,
    course: &'static str,
    teacher: &'static str,
    room: &'static str,
}

const SAMPLE_SCHEDULES: &[SampleSchedule] = &[
    SampleSchedule {
        group: "COMSE-25",
        day: "Monday",
        time: "08:00",
        course: "Data Structures",
        teacher: "Prof. Johnson",
        room: "Room 401",
    },
    SampleSchedule {
        group: "COMSE-25",
        day: "Monday",
        time: "09:30",
        course: "Algorithms",
        teacher: "Prof. Smith",
        room: "Room 305",
    },
    SampleSchedule {
        group: "COMCEH-25",
        day: "Tuesday",
        time: "08:00",
        course: "Computer Networks",
        teacher: "Prof. Williams",
        room: "Lab 201",
    },
    SampleSchedule {
        group: "MATDAIS-25",
        day: "Wednesday",
        time: "10:15",
        course: "Linear Algebra",
        teacher: "Prof. Davis",
        room: "Room 102",
    },
    SampleSchedule {
        group: "EEAIR-25",
        day: "Thursday",
        time: "14:00",
        course: "Circuit Theory",
        teacher: "Prof. Brown",
        room: "Lab 303",
    },
];

/// Seeds the default admin account, the university group list, and a handful
/// of sample schedule entries. Safe to run more than once.
pub async fn seed_database(db: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
    let admin_exists: Option<(i32,)> =
        sqlx::query_as("SELECT id FROM users WHERE username = 'admin'")
            .fetch_optional(db)
            .await?;

    if admin_exists.is_none() {
        let hashed_password =
            hash_password("admin123").map_err(|e| format!("Failed to hash password: {}", e.error))?;

        sqlx::query("INSERT INTO users (username, password_hash, role) VALUES ($1, $2, $3)")
            .bind("admin")
            .bind(hashed_password)
            .bind("admin")
            .execute(db)
            .await?;

        info!("Created default admin user (username: admin, password: admin123)");
    } else {
        info!("Admin user already exists, skipping");
    }

    for group_name in UNIVERSITY_GROUPS {
        sqlx::query("INSERT INTO groups (name) VALUES ($1) ON CONFLICT (name) DO NOTHING")
            .bind(group_name)
            .execute(db)
            .await?;
    }
    info!("Inserted {} groups", UNIVERSITY_GROUPS.len());

    for schedule in SAMPLE_SCHEDULES {
        sqlx::query(
            "INSERT INTO schedules (group_name, day, time, course, teacher, room)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (group_name, day, time) DO NOTHING",
        )
        .bind(schedule.group)
        .bind(schedule.day)
        .bind(schedule.time)
        .bind(schedule.course)
        .bind(schedule.teacher)
        .bind(schedule.room)
        .execute(db)
        .await?;
    }
    info!("Inserted {} sample schedules", SAMPLE_SCHEDULES.len());

    Ok(())
}
