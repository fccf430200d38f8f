// Schedule event CRUD HTTP routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use schedulebuilder_contracts::{
    CreateScheduleEventRequest, ScheduleEvent, UpdateScheduleEventRequest,
};
use schedulebuilder_storage::Database;
use std::sync::Arc;

use crate::services::EventService;

/// App state for event routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<EventService>,
}

impl AppState {
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            service: Arc::new(EventService::new(db)),
        }
    }
}

/// Create event routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/events", get(list_events).post(create_event))
        .route("/events/recurring", get(list_recurring_events))
        .route("/events/date/{date}", get(list_events_by_date))
        .route("/events/day/{day}", get(list_events_by_day))
        .route(
            "/events/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
        .with_state(state)
}

/// GET /events - List all events
#[utoipa::path(
    get,
    path = "/events",
    responses(
        (status = 200, description = "All events", body = Vec<ScheduleEvent>),
        (status = 500, description = "Internal server error")
    ),
    tag = "events"
)]
pub async fn list_events(
    State(state): State<AppState>,
) -> Result<Json<Vec<ScheduleEvent>>, StatusCode> {
    let events = state.service.list().await.map_err(|e| {
        tracing::error!("Failed to list events: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(events))
}

/// GET /events/{id} - Get event by ID
#[utoipa::path(
    get,
    path = "/events/{id}",
    params(
        ("id" = i64, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event found", body = ScheduleEvent),
        (status = 404, description = "Event not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "events"
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ScheduleEvent>, StatusCode> {
    let event = state
        .service
        .get(id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get event: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(event))
}

/// POST /events - Create a new event
#[utoipa::path(
    post,
    path = "/events",
    request_body = CreateScheduleEventRequest,
    responses(
        (status = 201, description = "Event created successfully", body = ScheduleEvent),
        (status = 500, description = "Internal server error")
    ),
    tag = "events"
)]
pub async fn create_event(
    State(state): State<AppState>,
    Json(req): Json<CreateScheduleEventRequest>,
) -> Result<(StatusCode, Json<ScheduleEvent>), StatusCode> {
    let event = state.service.create(req).await.map_err(|e| {
        tracing::error!("Failed to create event: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok((StatusCode::CREATED, Json(event)))
}

/// PUT /events/{id} - Replace an event's mutable fields
#[utoipa::path(
    put,
    path = "/events/{id}",
    params(
        ("id" = i64, Path, description = "Event ID")
    ),
    request_body = UpdateScheduleEventRequest,
    responses(
        (status = 200, description = "Event updated successfully", body = ScheduleEvent),
        (status = 404, description = "Event not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "events"
)]
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateScheduleEventRequest>,
) -> Result<Json<ScheduleEvent>, StatusCode> {
    let event = state
        .service
        .update(id, req)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update event: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(event))
}

/// DELETE /events/{id} - Delete event
#[utoipa::path(
    delete,
    path = "/events/{id}",
    params(
        ("id" = i64, Path, description = "Event ID")
    ),
    responses(
        (status = 204, description = "Event deleted successfully"),
        (status = 404, description = "Event not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "events"
)]
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    let deleted = state.service.delete(id).await.map_err(|e| {
        tracing::error!("Failed to delete event: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}

/// GET /events/date/{date} - List events on an exact calendar date
///
/// A malformed date is rejected by path extraction before any store access.
#[utoipa::path(
    get,
    path = "/events/date/{date}",
    params(
        ("date" = String, Path, description = "ISO-8601 calendar date (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Events on that date", body = Vec<ScheduleEvent>),
        (status = 400, description = "Malformed date"),
        (status = 500, description = "Internal server error")
    ),
    tag = "events"
)]
pub async fn list_events_by_date(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> Result<Json<Vec<ScheduleEvent>>, StatusCode> {
    let events = state.service.list_by_date(date).await.map_err(|e| {
        tracing::error!("Failed to list events by date: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(events))
}

/// GET /events/day/{day} - List events matching a weekday label
#[utoipa::path(
    get,
    path = "/events/day/{day}",
    params(
        ("day" = String, Path, description = "Weekday label, matched literally (e.g. \"Monday\")")
    ),
    responses(
        (status = 200, description = "Events matching the day label", body = Vec<ScheduleEvent>),
        (status = 500, description = "Internal server error")
    ),
    tag = "events"
)]
pub async fn list_events_by_day(
    State(state): State<AppState>,
    Path(day): Path<String>,
) -> Result<Json<Vec<ScheduleEvent>>, StatusCode> {
    let events = state.service.list_by_day(&day).await.map_err(|e| {
        tracing::error!("Failed to list events by day: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(events))
}

/// GET /events/recurring - List all recurring events
#[utoipa::path(
    get,
    path = "/events/recurring",
    responses(
        (status = 200, description = "All recurring events", body = Vec<ScheduleEvent>),
        (status = 500, description = "Internal server error")
    ),
    tag = "events"
)]
pub async fn list_recurring_events(
    State(state): State<AppState>,
) -> Result<Json<Vec<ScheduleEvent>>, StatusCode> {
    let events = state.service.list_recurring().await.map_err(|e| {
        tracing::error!("Failed to list recurring events: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(events))
}
