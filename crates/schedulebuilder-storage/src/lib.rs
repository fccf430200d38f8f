// Postgres storage layer with sqlx
//
// This crate owns the schedule_events table: keyed CRUD plus the three
// predicate lookups (by date, by weekday label, by recurring flag).

pub mod models;
pub mod repositories;

pub use models::*;
pub use repositories::*;
