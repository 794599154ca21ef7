//! Pass repository.

use sqlx::PgPool;
use uuid::Uuid;

use fest_core::error::{AppError, ErrorKind};
use fest_core::result::AppResult;
use fest_entity::pass::{CreatePass, Pass, UpdatePass};

/// Repository for pass CRUD and lookup.
#[derive(Debug, Clone)]
pub struct PassRepository {
    pool: PgPool,
}

impl PassRepository {
    /// Create a new pass repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a pass by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Pass>> {
        sqlx::query_as::<_, Pass>("SELECT * FROM passes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find pass by id", e))
    }

    /// List passes, cheapest first. Inactive passes only when requested.
    pub async fn find_all(&self, include_inactive: bool) -> AppResult<Vec<Pass>> {
        sqlx::query_as::<_, Pass>(
            "SELECT * FROM passes WHERE ($1 OR is_active) ORDER BY price ASC",
        )
        .bind(include_inactive)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list passes", e))
    }

    /// Create a new pass.
    pub async fn create(&self, data: &CreatePass) -> AppResult<Pass> {
        sqlx::query_as::<_, Pass>(
            "INSERT INTO passes (name, price, perks, pass_type, color) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(data.price)
        .bind(&data.perks)
        .bind(&data.pass_type)
        .bind(&data.color)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create pass", e))
    }

    /// Update a pass's fields. `None` fields are left unchanged.
    pub async fn update(&self, id: Uuid, data: &UpdatePass) -> AppResult<Pass> {
        sqlx::query_as::<_, Pass>(
            "UPDATE passes SET name = COALESCE($2, name), \
                               price = COALESCE($3, price), \
                               perks = COALESCE($4, perks), \
                               pass_type = COALESCE($5, pass_type), \
                               color = COALESCE($6, color), \
                               is_active = COALESCE($7, is_active), \
                               updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(data.price)
        .bind(&data.perks)
        .bind(&data.pass_type)
        .bind(&data.color)
        .bind(data.is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update pass", e))?
        .ok_or_else(|| AppError::not_found(format!("Pass {id} not found")))
    }

    /// Mark a pass as inactive.
    pub async fn deactivate(&self, id: Uuid) -> AppResult<Pass> {
        sqlx::query_as::<_, Pass>(
            "UPDATE passes SET is_active = FALSE, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to deactivate pass", e))?
        .ok_or_else(|| AppError::not_found(format!("Pass {id} not found")))
    }

    /// Delete a pass by ID.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM passes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete pass", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Whether any registration references this pass.
    pub async fn has_registrations(&self, id: Uuid) -> AppResult<bool> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM registrations WHERE pass_id = $1")
                .bind(id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to check pass usage", e)
                })?;
        Ok(count > 0)
    }

    /// Count active passes.
    pub async fn count_active(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM passes WHERE is_active")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count active passes", e)
            })
    }
}
