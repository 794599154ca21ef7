//! Dashboard statistics composition.
//!
//! Each role gets a different aggregation: deans and the principal see the
//! institute-wide overview, HODs see only their own department's events and
//! participants, and the operational roles (superadmin, admin) see totals
//! plus the most recent paid registrations.

use std::sync::Arc;

use tracing::debug;

use fest_core::error::AppError;
use fest_database::repositories::event::EventRepository;
use fest_database::repositories::pass::PassRepository;
use fest_database::repositories::registration::RegistrationRepository;
use fest_entity::admin::{Admin, AdminRole};
use fest_entity::event::Event;
use fest_entity::registration::RegistrationSummary;

/// Number of recent registrations shown on the operational dashboard.
const RECENT_REGISTRATIONS: i64 = 5;

/// Composes role-scoped dashboard statistics.
#[derive(Debug, Clone)]
pub struct DashboardService {
    /// Event repository.
    event_repo: Arc<EventRepository>,
    /// Pass repository.
    pass_repo: Arc<PassRepository>,
    /// Registration repository.
    registration_repo: Arc<RegistrationRepository>,
}

/// A labelled count for pie/bar chart payloads.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LabelledCount {
    /// Group label (department name, category, year of study).
    pub label: String,
    /// Number of rows in the group.
    pub count: i64,
}

/// Institute-wide overview for deans and the principal.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct OverviewStats {
    /// Total events across all departments.
    pub total_events: i64,
    /// Completed registrations.
    pub total_registrations: i64,
    /// Revenue from completed registrations.
    pub total_revenue: f64,
    /// Events per organizing department.
    pub department_stats: Vec<LabelledCount>,
    /// Completed registrations per participant department.
    pub registration_pie: Vec<LabelledCount>,
    /// Events per category.
    pub events_pie: Vec<LabelledCount>,
}

/// Department-scoped view for HODs.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DepartmentStats {
    /// The department this view is scoped to.
    pub department: String,
    /// Events organized by the department.
    pub events: Vec<Event>,
    /// Count of those events.
    pub total_events: i64,
    /// Distinct paid participants across the department's events.
    pub total_participants: i64,
    /// Year-of-study distribution of those participants.
    pub year_distribution: Vec<LabelledCount>,
}

/// Operational view for superadmins and admins.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct OperationalStats {
    /// Total events.
    pub total_events: i64,
    /// Completed registrations.
    pub total_registrations: i64,
    /// Currently purchasable passes.
    pub total_passes: i64,
    /// Revenue from completed registrations.
    pub total_revenue: f64,
    /// Most recent completed registrations with their pass names.
    pub recent_registrations: Vec<RegistrationSummary>,
    /// Completed registrations per participant department.
    pub registration_trends: Vec<LabelledCount>,
}

/// Role-branched dashboard payload.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum DashboardStats {
    /// Dean / principal institute-wide overview.
    Overview(OverviewStats),
    /// HOD department-scoped view.
    Department(DepartmentStats),
    /// Superadmin / admin operational view.
    Operational(OperationalStats),
}

impl DashboardService {
    /// Creates a new dashboard service.
    pub fn new(
        event_repo: Arc<EventRepository>,
        pass_repo: Arc<PassRepository>,
        registration_repo: Arc<RegistrationRepository>,
    ) -> Self {
        Self {
            event_repo,
            pass_repo,
            registration_repo,
        }
    }

    /// Computes the statistics view appropriate for the admin's role.
    pub async fn stats_for(&self, admin: &Admin) -> Result<DashboardStats, AppError> {
        debug!(admin_id = %admin.id, role = %admin.role, "Computing dashboard stats");

        match admin.role {
            AdminRole::Dean | AdminRole::Principal => {
                Ok(DashboardStats::Overview(self.overview().await?))
            }
            AdminRole::Hod => {
                let department = admin.department.as_deref().ok_or_else(|| {
                    AppError::validation("HOD account has no department assigned")
                })?;
                Ok(DashboardStats::Department(
                    self.department_view(department).await?,
                ))
            }
            AdminRole::Superadmin | AdminRole::Admin => {
                Ok(DashboardStats::Operational(self.operational().await?))
            }
        }
    }

    async fn overview(&self) -> Result<OverviewStats, AppError> {
        let total_events = self.event_repo.count().await?;
        let total_registrations = self.registration_repo.count_completed().await?;
        let total_revenue = self.registration_repo.total_revenue().await?;
        let department_stats = labelled(self.event_repo.count_by_department().await?);
        let registration_pie =
            labelled(self.registration_repo.count_completed_by_department().await?);
        let events_pie = labelled(self.event_repo.count_by_category().await?);

        Ok(OverviewStats {
            total_events,
            total_registrations,
            total_revenue,
            department_stats,
            registration_pie,
            events_pie,
        })
    }

    async fn department_view(&self, department: &str) -> Result<DepartmentStats, AppError> {
        let events = self.event_repo.find_by_department(department).await?;
        let total_participants = self
            .registration_repo
            .count_completed_for_department_events(department)
            .await?;
        let year_distribution = labelled(
            self.registration_repo
                .year_distribution_for_department(department)
                .await?,
        );

        Ok(DepartmentStats {
            department: department.to_string(),
            total_events: events.len() as i64,
            events,
            total_participants,
            year_distribution,
        })
    }

    async fn operational(&self) -> Result<OperationalStats, AppError> {
        let total_events = self.event_repo.count().await?;
        let total_registrations = self.registration_repo.count_completed().await?;
        let total_passes = self.pass_repo.count_active().await?;
        let total_revenue = self.registration_repo.total_revenue().await?;
        let recent_registrations = self
            .registration_repo
            .recent_completed(RECENT_REGISTRATIONS)
            .await?;
        let registration_trends =
            labelled(self.registration_repo.count_completed_by_department().await?);

        Ok(OperationalStats {
            total_events,
            total_registrations,
            total_passes,
            total_revenue,
            recent_registrations,
            registration_trends,
        })
    }
}

fn labelled(rows: Vec<(String, i64)>) -> Vec<LabelledCount> {
    rows.into_iter()
        .map(|(label, count)| LabelledCount { label, count })
        .collect()
}
