//! REST API for managing university class schedules.
//!
//! Groups of students each carry a weekly timetable of schedule entries
//! keyed by (group, day, time). Reads are public; writes require a JWT
//! issued to an admin account.

pub mod cli;
pub mod config;
pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;
pub mod validator;
