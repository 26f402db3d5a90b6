//! Schedule entry models.
//!
//! The identity key for every lookup and mutation is the triple
//! (group, day, time); the serial `id` is carried for clients but never used
//! for addressing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Teaching days. Deserialization rejects anything outside Monday..Saturday,
/// which is also enforced by a CHECK constraint in the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Day {
    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Day {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Monday" => Ok(Day::Monday),
            "Tuesday" => Ok(Day::Tuesday),
            "Wednesday" => Ok(Day::Wednesday),
            "Thursday" => Ok(Day::Thursday),
            "Friday" => Ok(Day::Friday),
            "Saturday" => Ok(Day::Saturday),
            other => Err(format!("Invalid day: {}", other)),
        }
    }
}

/// A schedule entry row. Serialized with the `group` key clients expect.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Schedule {
    pub id: i32,
    #[serde(rename = "group")]
    pub group_name: String,
    pub day: String,
    pub time: String,
    pub course: String,
    pub teacher: Option<String>,
    pub room: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Schedule {
    /// Composite key used by the schedules map response.
    pub fn map_key(&self) -> String {
        format!("{}-{}-{}", self.group_name, self.day, self.time)
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpsertScheduleRequest {
    #[validate(length(min = 1, max = 50, message = "Group name must be between 1 and 50 characters"))]
    pub group: String,
    pub day: Day,
    #[validate(length(min = 1, max = 10, message = "Time must be between 1 and 10 characters"))]
    pub time: String,
    #[validate(length(min = 1, message = "Course is required"))]
    pub course: String,
    pub teacher: Option<String>,
    pub room: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ScheduleResponse {
    pub success: bool,
    pub data: Schedule,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_round_trips_through_strings() {
        for day in [
            Day::Monday,
            Day::Tuesday,
            Day::Wednesday,
            Day::Thursday,
            Day::Friday,
            Day::Saturday,
        ] {
            assert_eq!(day.as_str().parse::<Day>().unwrap(), day);
        }
        assert!("Sunday".parse::<Day>().is_err());
    }

    #[test]
    fn day_deserialization_rejects_sunday() {
        assert!(serde_json::from_str::<Day>("\"Monday\"").is_ok());
        assert!(serde_json::from_str::<Day>("\"Sunday\"").is_err());
        assert!(serde_json::from_str::<Day>("\"monday\"").is_err());
    }
}
