// Database models (internal, may differ from public DTOs)

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct ScheduleEventRow {
    pub id: i64,
    pub title: String,
    pub date: Option<NaiveDate>,
    pub day: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub recurring: bool,
    pub recurrence_type: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateScheduleEvent {
    pub title: String,
    pub date: Option<NaiveDate>,
    pub day: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub recurring: bool,
    pub recurrence_type: Option<String>,
}

/// Full replacement of an event's mutable fields. Every field is written as
/// given, absent optionals clear the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateScheduleEvent {
    pub title: String,
    pub date: Option<NaiveDate>,
    pub day: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub recurring: bool,
    pub recurrence_type: Option<String>,
}
