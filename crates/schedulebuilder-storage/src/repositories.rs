// Repository layer for database operations

use anyhow::Result;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::*;

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create database connection from URL
    pub async fn from_url(database_url: &str) -> Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Run embedded migrations
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!("Database migrations applied");
        Ok(())
    }

    // ============================================
    // Schedule events
    // ============================================

    pub async fn create_event(&self, input: CreateScheduleEvent) -> Result<ScheduleEventRow> {
        let row = sqlx::query_as::<_, ScheduleEventRow>(
            r#"
            INSERT INTO schedule_events
                (title, date, day, start_time, end_time, description, color, recurring, recurrence_type)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, title, date, day, start_time, end_time, description, color, recurring, recurrence_type, created_at, updated_at
            "#,
        )
        .bind(&input.title)
        .bind(input.date)
        .bind(&input.day)
        .bind(&input.start_time)
        .bind(&input.end_time)
        .bind(&input.description)
        .bind(&input.color)
        .bind(input.recurring)
        .bind(&input.recurrence_type)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_event(&self, id: i64) -> Result<Option<ScheduleEventRow>> {
        let row = sqlx::query_as::<_, ScheduleEventRow>(
            r#"
            SELECT id, title, date, day, start_time, end_time, description, color, recurring, recurrence_type, created_at, updated_at
            FROM schedule_events
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn list_events(&self) -> Result<Vec<ScheduleEventRow>> {
        let rows = sqlx::query_as::<_, ScheduleEventRow>(
            r#"
            SELECT id, title, date, day, start_time, end_time, description, color, recurring, recurrence_type, created_at, updated_at
            FROM schedule_events
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Full replace of the mutable fields. Returns None when the id does not
    /// exist; never inserts.
    pub async fn update_event(
        &self,
        id: i64,
        input: UpdateScheduleEvent,
    ) -> Result<Option<ScheduleEventRow>> {
        let row = sqlx::query_as::<_, ScheduleEventRow>(
            r#"
            UPDATE schedule_events
            SET
                title = $2,
                date = $3,
                day = $4,
                start_time = $5,
                end_time = $6,
                description = $7,
                color = $8,
                recurring = $9,
                recurrence_type = $10,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, date, day, start_time, end_time, description, color, recurring, recurrence_type, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&input.title)
        .bind(input.date)
        .bind(&input.day)
        .bind(&input.start_time)
        .bind(&input.end_time)
        .bind(&input.description)
        .bind(&input.color)
        .bind(input.recurring)
        .bind(&input.recurrence_type)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn delete_event(&self, id: i64) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM schedule_events
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn list_events_by_date(&self, date: NaiveDate) -> Result<Vec<ScheduleEventRow>> {
        let rows = sqlx::query_as::<_, ScheduleEventRow>(
            r#"
            SELECT id, title, date, day, start_time, end_time, description, color, recurring, recurrence_type, created_at, updated_at
            FROM schedule_events
            WHERE date = $1
            ORDER BY id
            "#,
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Exact, case-sensitive match on the weekday label.
    pub async fn list_events_by_day(&self, day: &str) -> Result<Vec<ScheduleEventRow>> {
        let rows = sqlx::query_as::<_, ScheduleEventRow>(
            r#"
            SELECT id, title, date, day, start_time, end_time, description, color, recurring, recurrence_type, created_at, updated_at
            FROM schedule_events
            WHERE day = $1
            ORDER BY id
            "#,
        )
        .bind(day)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn list_recurring_events(&self) -> Result<Vec<ScheduleEventRow>> {
        let rows = sqlx::query_as::<_, ScheduleEventRow>(
            r#"
            SELECT id, title, date, day, start_time, end_time, description, color, recurring, recurrence_type, created_at, updated_at
            FROM schedule_events
            WHERE recurring
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
