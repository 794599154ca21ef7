//! Pass handlers — public pricing list plus admin CRUD.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use fest_entity::pass::{CreatePass, Pass, UpdatePass};

use crate::dto::request::{CreatePassRequest, PassListQuery, UpdatePassRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthAdmin;
use crate::middleware::rbac;
use crate::state::AppState;

/// GET /api/passes
///
/// Public callers see only active passes; `include_inactive=true` is
/// honored for authenticated admins.
pub async fn list(
    State(state): State<AppState>,
    auth: Option<AuthAdmin>,
    Query(query): Query<PassListQuery>,
) -> Result<Json<ApiResponse<Vec<Pass>>>, ApiError> {
    let include_inactive = query.include_inactive && auth.is_some();
    let passes = state.pass_repo.find_all(include_inactive).await?;
    Ok(Json(ApiResponse::ok(passes)))
}

/// POST /api/passes
pub async fn create(
    State(state): State<AppState>,
    auth: AuthAdmin,
    Json(req): Json<CreatePassRequest>,
) -> Result<Json<ApiResponse<Pass>>, ApiError> {
    rbac::require_operational(&auth)?;
    req.validate()?;

    let pass = state
        .pass_repo
        .create(&CreatePass {
            name: req.name,
            price: req.price,
            perks: req.perks,
            pass_type: req.pass_type,
            color: req.color,
        })
        .await?;

    Ok(Json(ApiResponse::ok(pass)))
}

/// PUT /api/passes/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthAdmin,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdatePassRequest>,
) -> Result<Json<ApiResponse<Pass>>, ApiError> {
    rbac::require_operational(&auth)?;
    req.validate()?;

    let pass = state
        .pass_repo
        .update(
            id,
            &UpdatePass {
                name: req.name,
                price: req.price,
                perks: req.perks,
                pass_type: req.pass_type,
                color: req.color,
                is_active: req.is_active,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(pass)))
}

/// DELETE /api/passes/{id}
///
/// Passes referenced by registrations are deactivated instead of deleted
/// so historical amounts stay resolvable.
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    rbac::require_operational(&auth)?;

    let message = if state.pass_repo.has_registrations(id).await? {
        let pass = state.pass_repo.deactivate(id).await?;
        format!("Pass '{}' deactivated (registrations exist)", pass.name)
    } else {
        let deleted = state.pass_repo.delete(id).await?;
        if !deleted {
            return Err(fest_core::AppError::not_found(format!(
                "Pass {id} not found"
            ))
            .into());
        }
        "Pass deleted".to_string()
    };

    Ok(Json(ApiResponse::ok(MessageResponse { message })))
}
