//! Event entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A single fest event (workshop, competition, performance, ...).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    /// Unique event identifier.
    pub id: Uuid,
    /// Event title.
    pub title: String,
    /// Longer description shown on the event page.
    pub description: Option<String>,
    /// Day the event takes place.
    pub date: NaiveDate,
    /// Start time display string (e.g. "10:00 AM").
    pub from_time: Option<String>,
    /// End time display string.
    pub to_time: Option<String>,
    /// Legacy free-text timings, used when from/to are absent.
    pub timings: Option<String>,
    /// Venue name.
    pub venue: String,
    /// Organizing department.
    pub department: String,
    /// Category tag (cultural, technical, sports, ...).
    pub category: String,
    /// Optional banner image path.
    pub image: Option<String>,
    /// When the event was created.
    pub created_at: DateTime<Utc>,
    /// When the event was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEvent {
    /// Event title.
    pub title: String,
    /// Description.
    pub description: Option<String>,
    /// Event date.
    pub date: NaiveDate,
    /// Start time display string.
    pub from_time: Option<String>,
    /// End time display string.
    pub to_time: Option<String>,
    /// Legacy timings string.
    pub timings: Option<String>,
    /// Venue.
    pub venue: String,
    /// Organizing department.
    pub department: String,
    /// Category.
    pub category: String,
    /// Banner image path.
    pub image: Option<String>,
}

/// Partial update for an existing event. `None` fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateEvent {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New date.
    pub date: Option<NaiveDate>,
    /// New start time.
    pub from_time: Option<String>,
    /// New end time.
    pub to_time: Option<String>,
    /// New legacy timings string.
    pub timings: Option<String>,
    /// New venue.
    pub venue: Option<String>,
    /// New department.
    pub department: Option<String>,
    /// New category.
    pub category: Option<String>,
    /// New image path.
    pub image: Option<String>,
}
