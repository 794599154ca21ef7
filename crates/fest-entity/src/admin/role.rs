//! Admin role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Administrative roles with scoped dashboard views.
///
/// `Superadmin` and `Admin` manage the whole fest; `Hod` is scoped to a
/// single department; `Dean` and `Principal` get the institute-wide
/// overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "admin_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AdminRole {
    /// Full system administrator, including admin account management.
    Superadmin,
    /// Fest organizing team member.
    Admin,
    /// Head of department; sees only their department's events.
    Hod,
    /// Dean; institute-wide read-only overview.
    Dean,
    /// Principal; institute-wide read-only overview.
    Principal,
}

impl AdminRole {
    /// Whether this role may create and modify events, passes, and content.
    pub fn can_manage_content(&self) -> bool {
        matches!(self, Self::Superadmin | Self::Admin | Self::Hod)
    }

    /// Whether this role sees the institute-wide overview dashboard.
    pub fn is_overview_role(&self) -> bool {
        matches!(self, Self::Dean | Self::Principal)
    }

    /// Whether this role is scoped to a single department.
    pub fn is_department_scoped(&self) -> bool {
        matches!(self, Self::Hod)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Superadmin => "superadmin",
            Self::Admin => "admin",
            Self::Hod => "hod",
            Self::Dean => "dean",
            Self::Principal => "principal",
        }
    }
}

impl fmt::Display for AdminRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AdminRole {
    type Err = fest_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "superadmin" => Ok(Self::Superadmin),
            "admin" => Ok(Self::Admin),
            "hod" => Ok(Self::Hod),
            "dean" => Ok(Self::Dean),
            "principal" => Ok(Self::Principal),
            _ => Err(fest_core::AppError::validation(format!(
                "Invalid admin role: '{s}'. Expected one of: superadmin, admin, hod, dean, principal"
            ))),
        }
    }
}
