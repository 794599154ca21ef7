//! Registration entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::PaymentStatus;

/// A participant's enrollment, linked to a pass and/or events.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Registration {
    /// Unique registration identifier.
    pub id: Uuid,
    /// Participant name.
    pub name: String,
    /// Participant email.
    pub email: String,
    /// Participant phone number.
    pub phone: Option<String>,
    /// Participant's college.
    pub college: Option<String>,
    /// Participant's department (used for dashboard breakdowns).
    pub department: String,
    /// Participant's year of study ("1", "2", ...).
    pub year: String,
    /// Purchased pass, if any.
    pub pass_id: Option<Uuid>,
    /// Amount in the legacy display form ("500/-"). The numeric prefix is
    /// extracted in SQL for revenue sums; unparseable values count as 0.
    pub amount: String,
    /// Payment lifecycle state.
    pub payment_status: PaymentStatus,
    /// External payment reference (transaction id, UPI ref, ...).
    pub payment_ref: Option<String>,
    /// When the registration was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRegistration {
    /// Participant name.
    pub name: String,
    /// Participant email.
    pub email: String,
    /// Participant phone number.
    pub phone: Option<String>,
    /// Participant's college.
    pub college: Option<String>,
    /// Participant's department.
    pub department: String,
    /// Participant's year of study.
    pub year: String,
    /// Purchased pass.
    pub pass_id: Option<Uuid>,
    /// Events the participant enrolled in.
    pub event_ids: Vec<Uuid>,
    /// Amount display string derived from the pass price.
    pub amount: String,
    /// External payment reference.
    pub payment_ref: Option<String>,
}

/// Registration row joined with its pass name, for dashboard listings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RegistrationSummary {
    /// Registration identifier.
    pub id: Uuid,
    /// Participant name.
    pub name: String,
    /// Participant's department.
    pub department: String,
    /// Participant's year of study.
    pub year: String,
    /// Amount display string.
    pub amount: String,
    /// Name of the purchased pass, if any.
    pub pass_name: Option<String>,
    /// When the registration was created.
    pub created_at: DateTime<Utc>,
}
