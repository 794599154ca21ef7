//! Pass entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A purchasable pass granting access to one or more events.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Pass {
    /// Unique pass identifier.
    pub id: Uuid,
    /// Pass name shown on the pricing card.
    pub name: String,
    /// Price in whole rupees.
    pub price: i32,
    /// Bullet-point perks shown on the card.
    pub perks: Vec<String>,
    /// Pass type label (e.g. "Individual", "Group").
    pub pass_type: String,
    /// UI color tag for card styling.
    pub color: Option<String>,
    /// Whether the pass is currently purchasable.
    pub is_active: bool,
    /// When the pass was created.
    pub created_at: DateTime<Utc>,
    /// When the pass was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Pass {
    /// Legacy display form of the price, as printed on receipts ("500/-").
    pub fn amount_display(&self) -> String {
        format!("{}/-", self.price)
    }
}

/// Data required to create a new pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePass {
    /// Pass name.
    pub name: String,
    /// Price in whole rupees.
    pub price: i32,
    /// Perks list.
    pub perks: Vec<String>,
    /// Pass type label.
    pub pass_type: String,
    /// UI color tag.
    pub color: Option<String>,
}

/// Partial update for an existing pass. `None` fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdatePass {
    /// New name.
    pub name: Option<String>,
    /// New price.
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
