//! Admin account repository.

use sqlx::PgPool;
use uuid::Uuid;

use fest_core::error::{AppError, ErrorKind};
use fest_core::result::AppResult;
use fest_entity::admin::{Admin, CreateAdmin};

/// Repository for admin account CRUD and lookup.
#[derive(Debug, Clone)]
pub struct AdminRepository {
    pool: PgPool,
}

impl AdminRepository {
    /// Create a new admin repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an admin by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Admin>> {
        sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find admin by id", e))
    }

    /// Find an admin by username (case-insensitive).
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<Admin>> {
        sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE LOWER(username) = LOWER($1)")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find admin by username", e)
            })
    }

    /// Create a new admin account.
    pub async fn create(&self, data: &CreateAdmin) -> AppResult<Admin> {
        sqlx::query_as::<_, Admin>(
            "INSERT INTO admins (username, password_hash, role, department) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(&data.username)
        .bind(&data.password_hash)
        .bind(data.role)
        .bind(&data.department)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("admins_username_key") =>
            {
                AppError::conflict(format!("Admin '{}' already exists", data.username))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create admin", e),
        })
    }

    /// Update last login timestamp.
    pub async fn update_last_login(&self, admin_id: Uuid) -> AppResult<()> {
        sqlx::query("UPDATE admins SET last_login_at = NOW(), updated_at = NOW() WHERE id = $1")
            .bind(admin_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update last login", e)
            })?;
        Ok(())
    }

    /// Count total admin accounts.
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM admins")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count admins", e))
    }
}
