//! Role checks for guarded routes.

use fest_core::error::AppError;
use fest_entity::admin::{Admin, AdminRole};

/// Checks that the admin has an operational role (superadmin or admin).
pub fn require_operational(admin: &Admin) -> Result<(), AppError> {
    match admin.role {
        AdminRole::Superadmin | AdminRole::Admin => Ok(()),
        _ => Err(AppError::forbidden("Admin access required")),
    }
}

/// Checks that the admin may manage events and content
/// (superadmin, admin, or HOD).
pub fn require_content_manager(admin: &Admin) -> Result<(), AppError> {
    if admin.role.can_manage_content() {
        Ok(())
    } else {
        Err(AppError::forbidden("Content management access required"))
    }
}

/// Checks that a department-scoped admin is operating on their own
/// department. Operational roles pass for any department.
pub fn ensure_department_access(admin: &Admin, department: &str) -> Result<(), AppError> {
    if !admin.role.is_department_scoped() {
        return Ok(());
    }

    let own = admin
        .department
        .as_deref()
        .ok_or_else(|| AppError::validation("HOD account has no department assigned"))?;

    if own.eq_ignore_ascii_case(department) {
        Ok(())
    } else {
        Err(AppError::forbidden(format!(
            "HOD accounts may only manage events for the {own} department"
        )))
    }
}
