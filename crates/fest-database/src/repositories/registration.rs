//! Registration repository, including the dashboard aggregation queries.
//!
//! Revenue sums parse the numeric prefix of the legacy `amount` display
//! string ("500/-"); rows that do not parse count as 0 rather than failing
//! the whole query.

use sqlx::PgPool;
use uuid::Uuid;

use fest_core::error::{AppError, ErrorKind};
use fest_core::result::AppResult;
use fest_core::types::pagination::{PageRequest, PageResponse};
use fest_entity::event::Event;
use fest_entity::registration::{
    CreateRegistration, PaymentStatus, Registration, RegistrationSummary,
};

/// Per-row numeric extraction from the legacy amount string.
const AMOUNT_NUMERIC: &str = "CASE WHEN btrim(split_part(amount, '/', 1)) ~ '^[0-9]+(\\.[0-9]+)?$' \
     THEN btrim(split_part(amount, '/', 1))::numeric ELSE 0 END";

/// Repository for registrations and their event links.
#[derive(Debug, Clone)]
pub struct RegistrationRepository {
    pool: PgPool,
}

impl RegistrationRepository {
    /// Create a new registration repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a registration by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Registration>> {
        sqlx::query_as::<_, Registration>("SELECT * FROM registrations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find registration by id", e)
            })
    }

    /// List the events a registration is linked to.
    pub async fn find_events(&self, registration_id: Uuid) -> AppResult<Vec<Event>> {
        sqlx::query_as::<_, Event>(
            "SELECT e.* FROM events e \
             JOIN registration_events re ON re.event_id = e.id \
             WHERE re.registration_id = $1 \
             ORDER BY e.date ASC",
        )
        .bind(registration_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list registration events", e)
        })
    }

    /// List registrations with pagination and optional filters.
    pub async fn find_all(
        &self,
        page: &PageRequest,
        status: Option<PaymentStatus>,
        department: Option<&str>,
    ) -> AppResult<PageResponse<RegistrationSummary>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM registrations r \
             WHERE ($1::payment_status IS NULL OR r.payment_status = $1) \
               AND ($2::text IS NULL OR LOWER(r.department) = LOWER($2))",
        )
        .bind(status)
        .bind(department)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count registrations", e)
        })?;

        let rows = sqlx::query_as::<_, RegistrationSummary>(
            "SELECT r.id, r.name, r.department, r.year, r.amount, p.name AS pass_name, r.created_at \
             FROM registrations r \
             LEFT JOIN passes p ON p.id = r.pass_id \
             WHERE ($1::payment_status IS NULL OR r.payment_status = $1) \
               AND ($2::text IS NULL OR LOWER(r.department) = LOWER($2)) \
             ORDER BY r.created_at DESC LIMIT $3 OFFSET $4",
        )
        .bind(status)
        .bind(department)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list registrations", e)
        })?;

        Ok(PageResponse::new(
            rows,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a registration and its event links in one transaction.
    pub async fn create(&self, data: &CreateRegistration) -> AppResult<Registration> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let registration = sqlx::query_as::<_, Registration>(
            "INSERT INTO registrations (name, email, phone, college, department, year, pass_id, amount, payment_ref) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.college)
        .bind(&data.department)
        .bind(&data.year)
        .bind(data.pass_id)
        .bind(&data.amount)
        .bind(&data.payment_ref)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create registration", e))?;

        for event_id in &data.event_ids {
            sqlx::query(
                "INSERT INTO registration_events (registration_id, event_id) VALUES ($1, $2)",
            )
            .bind(registration.id)
            .bind(event_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to link registration event", e)
            })?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit registration", e)
        })?;

        Ok(registration)
    }

    /// Update a registration's payment status (and optionally the reference).
    pub async fn update_payment(
        &self,
        id: Uuid,
        status: PaymentStatus,
        payment_ref: Option<&str>,
    ) -> AppResult<Registration> {
        sqlx::query_as::<_, Registration>(
            "UPDATE registrations SET payment_status = $2, \
                                      payment_ref = COALESCE($3, payment_ref) \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .bind(payment_ref)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update payment", e))?
        .ok_or_else(|| AppError::not_found(format!("Registration {id} not found")))
    }

    /// Count completed registrations.
    pub async fn count_completed(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM registrations WHERE payment_status = 'completed'")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    "Failed to count completed registrations",
                    e,
                )
            })
    }

    /// Total revenue from completed registrations.
    pub async fn total_revenue(&self) -> AppResult<f64> {
        let sql = format!(
            "SELECT COALESCE(SUM({AMOUNT_NUMERIC}), 0)::float8 \
             FROM registrations WHERE payment_status = 'completed'"
        );
        sqlx::query_scalar(&sql)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to sum revenue", e))
    }

    /// Completed registrations grouped by participant department.
    pub async fn count_completed_by_department(&self) -> AppResult<Vec<(String, i64)>> {
        sqlx::query_as(
            "SELECT department, COUNT(*) FROM registrations \
             WHERE payment_status = 'completed' \
             GROUP BY department ORDER BY COUNT(*) DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to count registrations by department",
                e,
            )
        })
    }

    /// Distinct completed registrations linked to a department's events.
    pub async fn count_completed_for_department_events(
        &self,
        department: &str,
    ) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(DISTINCT r.id) FROM registrations r \
             JOIN registration_events re ON re.registration_id = r.id \
             JOIN events e ON e.id = re.event_id \
             WHERE r.payment_status = 'completed' AND LOWER(e.department) = LOWER($1)",
        )
        .bind(department)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to count department participants",
                e,
            )
        })
    }

    /// Year-wise distribution of completed participants for a department's events.
    pub async fn year_distribution_for_department(
        &self,
        department: &str,
    ) -> AppResult<Vec<(String, i64)>> {
        sqlx::query_as(
            "SELECT r.year, COUNT(DISTINCT r.id) FROM registrations r \
             JOIN registration_events re ON re.registration_id = r.id \
             JOIN events e ON e.id = re.event_id \
             WHERE r.payment_status = 'completed' AND LOWER(e.department) = LOWER($1) \
             GROUP BY r.year ORDER BY r.year ASC",
        )
        .bind(department)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to compute year distribution", e)
        })
    }

    /// Most recent completed registrations with their pass names.
    pub async fn recent_completed(&self, limit: i64) -> AppResult<Vec<RegistrationSummary>> {
        sqlx::query_as::<_, RegistrationSummary>(
            "SELECT r.id, r.name, r.department, r.year, r.amount, p.name AS pass_name, r.created_at \
             FROM registrations r \
             LEFT JOIN passes p ON p.id = r.pass_id \
             WHERE r.payment_status = 'completed' \
             ORDER BY r.created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list recent registrations", e)
        })
    }
}
