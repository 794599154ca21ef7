//! Sponsor, club, and site configuration models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A fest sponsor shown on the public site.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Sponsor {
    /// Unique sponsor identifier.
    pub id: Uuid,
    /// Sponsor name.
    pub name: String,
    /// Logo image path.
    pub logo: Option<String>,
    /// Sponsor website URL.
    pub website: Option<String>,
    /// Display ordering (lower first).
    pub sort_order: i32,
    /// When the sponsor was added.
    pub created_at: DateTime<Utc>,
}

/// Data required to add a sponsor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSponsor {
    /// Sponsor name.
    pub name: String,
    /// Logo image path.
    pub logo: Option<String>,
    /// Website URL.
    pub website: Option<String>,
    /// Display ordering.
    pub sort_order: i32,
}

/// A student club participating in the fest.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Club {
    /// Unique club identifier.
    pub id: Uuid,
    /// Club name.
    pub name: String,
    /// Short description.
    pub description: Option<String>,
    /// Club image path.
    pub image: Option<String>,
    /// Display ordering (lower first).
    pub sort_order: i32,
    /// When the club was added.
    pub created_at: DateTime<Utc>,
}

/// Data required to add a club.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateClub {
    /// Club name.
    pub name: String,
    /// Short description.
    pub description: Option<String>,
    /// Club image path.
    pub image: Option<String>,
    /// Display ordering.
    pub sort_order: i32,
}

/// Global site configuration (single row).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SiteConfig {
    /// Website display name.
    pub website_name: String,
    /// Fest edition year shown in the header.
    pub event_year: String,
    /// Contact email.
    pub contact_email: Option<String>,
    /// Contact phone.
    pub contact_phone: Option<String>,
    /// Contact address.
    pub contact_address: Option<String>,
    /// Navbar logo image path.
    pub navbar_logo: Option<String>,
}

/// Partial update for the site configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateSiteConfig {
    /// New website name.
    pub website_name: Option<String>,
    /// New event year.
    pub event_year: Option<String>,
    /// New contact email.
    pub contact_email: Option<String>,
    /// New contact phone.
    pub contact_phone: Option<String>,
    /// New contact address.
    pub contact_address: Option<String>,
    /// New navbar logo path.
    pub navbar_logo: Option<String>,
}
