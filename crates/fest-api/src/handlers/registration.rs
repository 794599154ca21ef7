//! Registration handlers — public enrollment plus admin management.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use fest_core::types::pagination::PageResponse;
use fest_entity::registration::{Registration, RegistrationSummary};
use fest_service::registration::{EnrollmentRequest, RegistrationDetail};

use crate::dto::request::{EnrollRequest, RegistrationListQuery, UpdatePaymentRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{AuthAdmin, PaginationParams};
use crate::middleware::rbac;
use crate::state::AppState;

/// POST /api/registrations
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<EnrollRequest>,
) -> Result<Json<ApiResponse<Registration>>, ApiError> {
    req.validate()?;

    let registration = state
        .registration_service
        .enroll(EnrollmentRequest {
            name: req.name,
            email: req.email,
            phone: req.phone,
            college: req.college,
            department: req.department,
            year: req.year,
            pass_id: req.pass_id,
            event_ids: req.event_ids,
            payment_ref: req.payment_ref,
        })
        .await?;

    Ok(Json(ApiResponse::ok(registration)))
}

/// GET /api/registrations
pub async fn list(
    State(state): State<AppState>,
    auth: AuthAdmin,
    Query(query): Query<RegistrationListQuery>,
) -> Result<Json<ApiResponse<PageResponse<RegistrationSummary>>>, ApiError> {
    rbac::require_operational(&auth)?;

    let page = PaginationParams::from((query.page, query.page_size)).into_page_request();
    let registrations = state
        .registration_repo
        .find_all(&page, query.payment_status, query.department.as_deref())
        .await?;

    Ok(Json(ApiResponse::ok(registrations)))
}

/// GET /api/registrations/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: AuthAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<RegistrationDetail>>, ApiError> {
    rbac::require_operational(&auth)?;

    let detail = state.registration_service.detail(id).await?;
    Ok(Json(ApiResponse::ok(detail)))
}

/// PUT /api/registrations/{id}/payment
pub async fn update_payment(
    State(state): State<AppState>,
    auth: AuthAdmin,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdatePaymentRequest>,
) -> Result<Json<ApiResponse<Registration>>, ApiError> {
    rbac::require_operational(&auth)?;

    let registration = state
        .registration_repo
        .update_payment(id, req.payment_status, req.payment_ref.as_deref())
        .await?;

    Ok(Json(ApiResponse::ok(registration)))
}
