//! Event repository.

use sqlx::PgPool;
use uuid::Uuid;

use fest_core::error::{AppError, ErrorKind};
use fest_core::result::AppResult;
use fest_core::types::pagination::{PageRequest, PageResponse};
use fest_entity::event::{CreateEvent, Event, UpdateEvent};

/// Repository for event CRUD and aggregation queries.
#[derive(Debug, Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    /// Create a new event repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an event by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Event>> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find event by id", e))
    }

    /// List events with pagination and optional department/category filters.
    pub async fn find_all(
        &self,
        page: &PageRequest,
        department: Option<&str>,
        category: Option<&str>,
    ) -> AppResult<PageResponse<Event>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM events \
             WHERE ($1::text IS NULL OR LOWER(department) = LOWER($1)) \
               AND ($2::text IS NULL OR LOWER(category) = LOWER($2))",
        )
        .bind(department)
        .bind(category)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count events", e))?;

        let events = sqlx::query_as::<_, Event>(
            "SELECT * FROM events \
             WHERE ($1::text IS NULL OR LOWER(department) = LOWER($1)) \
               AND ($2::text IS NULL OR LOWER(category) = LOWER($2)) \
             ORDER BY date ASC, created_at ASC LIMIT $3 OFFSET $4",
        )
        .bind(department)
        .bind(category)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list events", e))?;

        Ok(PageResponse::new(
            events,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List all events organized by a department (case-insensitive).
    pub async fn find_by_department(&self, department: &str) -> AppResult<Vec<Event>> {
        sqlx::query_as::<_, Event>(
            "SELECT * FROM events WHERE LOWER(department) = LOWER($1) ORDER BY date ASC",
        )
        .bind(department)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list department events", e)
        })
    }

    /// Create a new event.
    pub async fn create(&self, data: &CreateEvent) -> AppResult<Event> {
        sqlx::query_as::<_, Event>(
            "INSERT INTO events (title, description, date, from_time, to_time, timings, venue, department, category, image) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.date)
        .bind(&data.from_time)
        .bind(&data.to_time)
        .bind(&data.timings)
        .bind(&data.venue)
        .bind(&data.department)
        .bind(&data.category)
        .bind(&data.image)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create event", e))
    }

    /// Update an event's fields. `None` fields are left unchanged.
    pub async fn update(&self, id: Uuid, data: &UpdateEvent) -> AppResult<Event> {
        sqlx::query_as::<_, Event>(
            "UPDATE events SET title = COALESCE($2, title), \
                               description = COALESCE($3, description), \
                               date = COALESCE($4, date), \
                               from_time = COALESCE($5, from_time), \
                               to_time = COALESCE($6, to_time), \
                               timings = COALESCE($7, timings), \
                               venue = COALESCE($8, venue), \
                               department = COALESCE($9, department), \
                               category = COALESCE($10, category), \
                               image = COALESCE($11, image), \
                               updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.date)
        .bind(&data.from_time)
        .bind(&data.to_time)
        .bind(&data.timings)
        .bind(&data.venue)
        .bind(&data.department)
        .bind(&data.category)
        .bind(&data.image)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update event", e))?
        .ok_or_else(|| AppError::not_found(format!("Event {id} not found")))
    }

    /// Delete an event by ID.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete event", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Count total events.
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM events")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count events", e))
    }

    /// Count events grouped by organizing department.
    pub async fn count_by_department(&self) -> AppResult<Vec<(String, i64)>> {
        sqlx::query_as(
            "SELECT department, COUNT(*) FROM events GROUP BY department ORDER BY COUNT(*) DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count events by department", e)
        })
    }

    /// Count events grouped by category.
    pub async fn count_by_category(&self) -> AppResult<Vec<(String, i64)>> {
        sqlx::query_as(
            "SELECT category, COUNT(*) FROM events GROUP BY category ORDER BY COUNT(*) DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count events by category", e)
        })
    }

    /// Check that every given event ID exists. Returns the missing IDs.
    pub async fn find_missing(&self, ids: &[Uuid]) -> AppResult<Vec<Uuid>> {
        let existing: Vec<(Uuid,)> = sqlx::query_as("SELECT id FROM events WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to check event ids", e)
            })?;

        let existing: std::collections::HashSet<Uuid> =
            existing.into_iter().map(|(id,)| id).collect();
        Ok(ids
            .iter()
            .copied()
            .filter(|id| !existing.contains(id))
            .collect())
    }
}
