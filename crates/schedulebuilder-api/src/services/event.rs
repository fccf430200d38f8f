// Schedule event service for business logic

use anyhow::Result;
use chrono::NaiveDate;
use schedulebuilder_contracts::{
    CreateScheduleEventRequest, ScheduleEvent, UpdateScheduleEventRequest,
};
use schedulebuilder_storage::{
    models::{CreateScheduleEvent, UpdateScheduleEvent},
    Database,
};
use std::sync::Arc;

pub struct EventService {
    db: Arc<Database>,
}

impl EventService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub async fn create(&self, req: CreateScheduleEventRequest) -> Result<ScheduleEvent> {
        let input = CreateScheduleEvent {
            title: req.title,
            date: req.date,
            day: req.day,
            start_time: req.start_time,
            end_time: req.end_time,
            description: req.description,
            color: req.color,
            recurring: req.recurring,
            recurrence_type: req.recurrence_type,
        };
        let row = self.db.create_event(input).await?;
        Ok(Self::row_to_event(row))
    }

    pub async fn get(&self, id: i64) -> Result<Option<ScheduleEvent>> {
        let row = self.db.get_event(id).await?;
        Ok(row.map(Self::row_to_event))
    }

    pub async fn list(&self) -> Result<Vec<ScheduleEvent>> {
        let rows = self.db.list_events().await?;
        Ok(rows.into_iter().map(Self::row_to_event).collect())
    }

    /// Full replacement of the event's mutable fields. The id comes from the
    /// request path and wins over anything in the payload.
    pub async fn update(
        &self,
        id: i64,
        req: UpdateScheduleEventRequest,
    ) -> Result<Option<ScheduleEvent>> {
        let input = UpdateScheduleEvent {
            title: req.title,
            date: req.date,
            day: req.day,
            start_time: req.start_time,
            end_time: req.end_time,
            description: req.description,
            color: req.color,
            recurring: req.recurring,
            recurrence_type: req.recurrence_type,
        };
        let row = self.db.update_event(id, input).await?;
        Ok(row.map(Self::row_to_event))
    }

    pub async fn delete(&self, id: i64) -> Result<bool> {
        self.db.delete_event(id).await
    }

    pub async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<ScheduleEvent>> {
        let rows = self.db.list_events_by_date(date).await?;
        Ok(rows.into_iter().map(Self::row_to_event).collect())
    }

    pub async fn list_by_day(&self, day: &str) -> Result<Vec<ScheduleEvent>> {
        let rows = self.db.list_events_by_day(day).await?;
        Ok(rows.into_iter().map(Self::row_to_event).collect())
    }

    pub async fn list_recurring(&self) -> Result<Vec<ScheduleEvent>> {
        let rows = self.db.list_recurring_events().await?;
        Ok(rows.into_iter().map(Self::row_to_event).collect())
    }

    fn row_to_event(row: schedulebuilder_storage::ScheduleEventRow) -> ScheduleEvent {
        ScheduleEvent {
            id: row.id,
            title: row.title,
            date: row.date,
            day: row.day,
            start_time: row.start_time,
            end_time: row.end_time,
            description: row.description,
            color: row.color,
            recurring: row.recurring,
            recurrence_type: row.recurrence_type,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
