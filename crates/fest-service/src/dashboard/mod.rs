//! Role-scoped dashboard statistics.

pub mod service;

pub use service::{
    DashboardService, DashboardStats, DepartmentStats, LabelledCount, OperationalStats,
    OverviewStats,
};
