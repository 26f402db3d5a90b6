//! Configuration modules, each loaded from environment variables.
//!
//! - [`cors`]: allowed origins for the CORS layer
//! - [`database`]: PostgreSQL connection pool initialization
//! - [`jwt`]: token signing secret and expiry

pub mod cors;
pub mod database;
pub mod jwt;
