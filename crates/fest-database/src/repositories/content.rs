//! Sponsor, club, and site configuration repository.

use sqlx::PgPool;
use uuid::Uuid;

use fest_core::error::{AppError, ErrorKind};
use fest_core::result::AppResult;
use fest_entity::content::{Club, CreateClub, CreateSponsor, SiteConfig, Sponsor, UpdateSiteConfig};

/// Repository for public site content.
#[derive(Debug, Clone)]
pub struct ContentRepository {
    pool: PgPool,
}

impl ContentRepository {
    /// Create a new content repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List sponsors in display order.
    pub async fn list_sponsors(&self) -> AppResult<Vec<Sponsor>> {
        sqlx::query_as::<_, Sponsor>("SELECT * FROM sponsors ORDER BY sort_order ASC, name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list sponsors", e))
    }

    /// Add a sponsor.
    pub async fn create_sponsor(&self, data: &CreateSponsor) -> AppResult<Sponsor> {
        sqlx::query_as::<_, Sponsor>(
            "INSERT INTO sponsors (name, logo, website, sort_order) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.logo)
        .bind(&data.website)
        .bind(data.sort_order)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create sponsor", e))
    }

    /// Remove a sponsor by ID.
    pub async fn delete_sponsor(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM sponsors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete sponsor", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// List clubs in display order.
    pub async fn list_clubs(&self) -> AppResult<Vec<Club>> {
        sqlx::query_as::<_, Club>("SELECT * FROM clubs ORDER BY sort_order ASC, name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list clubs", e))
    }

    /// Add a club.
    pub async fn create_club(&self, data: &CreateClub) -> AppResult<Club> {
        sqlx::query_as::<_, Club>(
            "INSERT INTO clubs (name, description, image, sort_order) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.image)
        .bind(data.sort_order)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create club", e))
    }

    /// Remove a club by ID.
    pub async fn delete_club(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM clubs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete club", e))?;
        Ok(result.rows_affected() > 0)
    }

    /// Fetch the single site configuration row.
    pub async fn get_site_config(&self) -> AppResult<SiteConfig> {
        sqlx::query_as::<_, SiteConfig>(
            "SELECT website_name, event_year, contact_email, contact_phone, contact_address, navbar_logo \
             FROM site_config WHERE id = 1",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load site config", e))
    }

    /// Update site configuration fields. `None` fields are left unchanged.
    pub async fn update_site_config(&self, data: &UpdateSiteConfig) -> AppResult<SiteConfig> {
        sqlx::query_as::<_, SiteConfig>(
            "UPDATE site_config SET website_name = COALESCE($1, website_name), \
                                    event_year = COALESCE($2, event_year), \
                                    contact_email = COALESCE($3, contact_email), \
                                    contact_phone = COALESCE($4, contact_phone), \
                                    contact_address = COALESCE($5, contact_address), \
                                    navbar_logo = COALESCE($6, navbar_logo) \
             WHERE id = 1 \
             RETURNING website_name, event_year, contact_email, contact_phone, contact_address, navbar_logo",
        )
        .bind(&data.website_name)
        .bind(&data.event_year)
        .bind(&data.contact_email)
        .bind(&data.contact_phone)
        .bind(&data.contact_address)
        .bind(&data.navbar_logo)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update site config", e))
    }
}
