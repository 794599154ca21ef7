//! Request DTOs with validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use fest_entity::registration::PaymentStatus;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Admin account creation request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SetupAdminRequest {
    /// Username.
    #[validate(length(min = 3, max = 100))]
    pub username: String,
    /// Password.
    #[validate(length(min = 8))]
    pub password: String,
    /// Role name; defaults to superadmin.
    pub role: Option<String>,
    /// Department, required for HOD accounts.
    pub department: Option<String>,
}

/// Create event request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateEventRequest {
    /// Event title.
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    /// Event description.
    pub description: Option<String>,
    /// Event date.
    pub date: NaiveDate,
    /// Start time display string.
    pub from_time: Option<String>,
    /// End time display string.
    pub to_time: Option<String>,
    /// Legacy free-text timings fallback.
    pub timings: Option<String>,
    /// Venue.
    #[validate(length(min = 1))]
    pub venue: String,
    /// Organizing department.
    #[validate(length(min = 1))]
    pub department: String,
    /// Event category.
    #[validate(length(min = 1))]
    pub category: String,
    /// Poster image path.
    pub image: Option<String>,
}

/// Partial event update request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
pub struct UpdateEventRequest {
    /// New title.
    #[validate(length(min = 1, max = 200))]
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

/// Event list query parameters.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EventListQuery {
    /// Page number (1-based).
    pub page: Option<u64>,
    /// Items per page.
    pub page_size: Option<u64>,
    /// Filter by organizing department.
    pub department: Option<String>,
    /// Filter by category.
    pub category: Option<String>,
}

/// Create pass request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePassRequest {
    /// Pass name.
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Price in whole rupees.
    #[validate(range(min = 0))]
    pub price: i32,
    /// Perks list.
    #[serde(default)]
    pub perks: Vec<String>,
    /// Pass type label.
    #[serde(default = "default_pass_type")]
    pub pass_type: String,
    /// UI color tag.
    pub color: Option<String>,
}

fn default_pass_type() -> String {
    "Individual".to_string()
}

/// Partial pass update request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
pub struct UpdatePassRequest {
    /// New name.
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    /// New price.
    #[validate(range(min = 0))]
    pub price: Option<i32>,
    /// New perks list.
    pub perks: Option<Vec<String>>,
    /// New pass type label.
    pub pass_type: Option<String>,
    /// New color tag.
    pub color: Option<String>,
    /// New active flag.
    pub is_active: Option<bool>,
}

/// Pass list query parameters.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PassListQuery {
    /// Include deactivated passes (requires authentication).
    #[serde(default)]
    pub include_inactive: bool,
}

/// Enrollment request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EnrollRequest {
    /// Participant name.
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    /// Participant email.
    #[validate(email)]
    pub email: String,
    /// Participant phone number.
    pub phone: Option<String>,
    /// Participant's college.
    pub college: Option<String>,
    /// Participant's department.
    #[validate(length(min = 1))]
    pub department: String,
    /// Participant's year of study.
    #[validate(length(min = 1))]
    pub year: String,
    /// Pass being purchased.
    pub pass_id: Option<Uuid>,
    /// Events the participant is enrolling in.
    #[serde(default)]
    pub event_ids: Vec<Uuid>,
    /// External payment reference.
    pub payment_ref: Option<String>,
}

/// Payment status update request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePaymentRequest {
    /// New payment status.
    pub payment_status: PaymentStatus,
    /// External payment reference, if newly available.
    pub payment_ref: Option<String>,
}

/// Registration list query parameters.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RegistrationListQuery {
    /// Page number (1-based).
    pub page: Option<u64>,
    /// Items per page.
    pub page_size: Option<u64>,
    /// Filter by payment status.
    pub payment_status: Option<PaymentStatus>,
    /// Filter by participant department.
    pub department: Option<String>,
}

/// Create sponsor request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSponsorRequest {
    /// Sponsor name.
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    /// Logo path.
    pub logo: Option<String>,
    /// Sponsor website URL.
    pub website: Option<String>,
    /// Display ordering.
    #[serde(default)]
    pub sort_order: i32,
}

/// Create club request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateClubRequest {
    /// Club name.
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    /// Club description.
    pub description: Option<String>,
    /// Club image path.
    pub image: Option<String>,
    /// Display ordering.
    #[serde(default)]
    pub sort_order: i32,
}

/// Site configuration update request.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateSiteConfigRequest {
    /// Website name shown in the navbar.
    pub website_name: Option<String>,
    /// Fest year label.
    pub event_year: Option<String>,
    /// Contact email.
    pub contact_email: Option<String>,
    /// Contact phone.
    pub contact_phone: Option<String>,
    /// Contact address.
    pub contact_address: Option<String>,
    /// Navbar logo path.
    pub navbar_logo: Option<String>,
}
