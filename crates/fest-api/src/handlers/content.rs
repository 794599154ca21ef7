//! Public site content handlers — sponsors, clubs, site configuration.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use fest_core::error::AppError;
use fest_entity::content::{Club, CreateClub, CreateSponsor, SiteConfig, Sponsor, UpdateSiteConfig};

use crate::dto::request::{CreateClubRequest, CreateSponsorRequest, UpdateSiteConfigRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthAdmin;
use crate::middleware::rbac;
use crate::state::AppState;

/// GET /api/content/sponsors
pub async fn list_sponsors(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Sponsor>>>, ApiError> {
    let sponsors = state.content_repo.list_sponsors().await?;
    Ok(Json(ApiResponse::ok(sponsors)))
}

/// POST /api/content/sponsors
pub async fn create_sponsor(
    State(state): State<AppState>,
    auth: AuthAdmin,
    Json(req): Json<CreateSponsorRequest>,
) -> Result<Json<ApiResponse<Sponsor>>, ApiError> {
    rbac::require_operational(&auth)?;
    req.validate()?;

    let sponsor = state
        .content_repo
        .create_sponsor(&CreateSponsor {
            name: req.name,
            logo: req.logo,
            website: req.website,
            sort_order: req.sort_order,
        })
        .await?;

    Ok(Json(ApiResponse::ok(sponsor)))
}

/// DELETE /api/content/sponsors/{id}
pub async fn delete_sponsor(
    State(state): State<AppState>,
    auth: AuthAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    rbac::require_operational(&auth)?;

    let deleted = state.content_repo.delete_sponsor(id).await?;
    if !deleted {
        return Err(AppError::not_found(format!("Sponsor {id} not found")).into());
    }

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Sponsor deleted".to_string(),
    })))
}

/// GET /api/content/clubs
pub async fn list_clubs(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Club>>>, ApiError> {
    let clubs = state.content_repo.list_clubs().await?;
    Ok(Json(ApiResponse::ok(clubs)))
}

/// POST /api/content/clubs
pub async fn create_club(
    State(state): State<AppState>,
    auth: AuthAdmin,
    Json(req): Json<CreateClubRequest>,
) -> Result<Json<ApiResponse<Club>>, ApiError> {
    rbac::require_operational(&auth)?;
    req.validate()?;

    let club = state
        .content_repo
        .create_club(&CreateClub {
            name: req.name,
            description: req.description,
            image: req.image,
            sort_order: req.sort_order,
        })
        .await?;

    Ok(Json(ApiResponse::ok(club)))
}

/// DELETE /api/content/clubs/{id}
pub async fn delete_club(
    State(state): State<AppState>,
    auth: AuthAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    rbac::require_operational(&auth)?;

    let deleted = state.content_repo.delete_club(id).await?;
    if !deleted {
        return Err(AppError::not_found(format!("Club {id} not found")).into());
    }

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Club deleted".to_string(),
    })))
}

/// GET /api/site-config
pub async fn get_site_config(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<SiteConfig>>, ApiError> {
    let config = state.content_repo.get_site_config().await?;
    Ok(Json(ApiResponse::ok(config)))
}

/// PUT /api/site-config
pub async fn update_site_config(
    State(state): State<AppState>,
    auth: AuthAdmin,
    Json(req): Json<UpdateSiteConfigRequest>,
) -> Result<Json<ApiResponse<SiteConfig>>, ApiError> {
    rbac::require_operational(&auth)?;

    let config = state
        .content_repo
        .update_site_config(&UpdateSiteConfig {
            website_name: req.website_name,
            event_year: req.event_year,
            contact_email: req.contact_email,
            contact_phone: req.contact_phone,
            contact_address: req.contact_address,
            navbar_logo: req.navbar_logo,
        })
        .await?;

    Ok(Json(ApiResponse::ok(config)))
}
