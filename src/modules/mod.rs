pub mod auth;
pub mod groups;
pub mod schedules;
pub mod users;
