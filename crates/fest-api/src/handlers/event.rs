//! Event handlers — public listing plus role-guarded CRUD.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use fest_core::error::AppError;
use fest_core::types::pagination::PageResponse;
use fest_entity::event::{CreateEvent, Event, UpdateEvent};

use crate::dto::request::{CreateEventRequest, EventListQuery, UpdateEventRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthAdmin, PaginationParams};
use crate::middleware::rbac;
use crate::state::AppState;

/// GET /api/events
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<EventListQuery>,
) -> Result<Json<ApiResponse<PageResponse<Event>>>, ApiError> {
    let page = PaginationParams::from((query.page, query.page_size)).into_page_request();
    let events = state
        .event_repo
        .find_all(&page, query.department.as_deref(), query.category.as_deref())
        .await?;
    Ok(Json(ApiResponse::ok(events)))
}

/// GET /api/events/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Event>>, ApiError> {
    let event = state
        .event_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Event {id} not found")))?;
    Ok(Json(ApiResponse::ok(event)))
}

/// POST /api/events
pub async fn create(
    State(state): State<AppState>,
    auth: AuthAdmin,
    Json(req): Json<CreateEventRequest>,
) -> Result<Json<ApiResponse<Event>>, ApiError> {
    rbac::require_content_manager(&auth)?;
    rbac::ensure_department_access(&auth, &req.department)?;
    req.validate()?;

    let event = state
        .event_repo
        .create(&CreateEvent {
            title: req.title,
            description: req.description,
            date: req.date,
            from_time: req.from_time,
            to_time: req.to_time,
            timings: req.timings,
            venue: req.venue,
            department: req.department,
            category: req.category,
            image: req.image,
        })
        .await?;

    Ok(Json(ApiResponse::ok(event)))
}

/// PUT /api/events/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthAdmin,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateEventRequest>,
) -> Result<Json<ApiResponse<Event>>, ApiError> {
    rbac::require_content_manager(&auth)?;
    req.validate()?;

    let existing = state
        .event_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Event {id} not found")))?;
    rbac::ensure_department_access(&auth, &existing.department)?;
    if let Some(new_department) = &req.department {
        rbac::ensure_department_access(&auth, new_department)?;
    }

    let event = state
        .event_repo
        .update(
            id,
            &UpdateEvent {
                title: req.title,
                description: req.description,
                date: req.date,
                from_time: req.from_time,
                to_time: req.to_time,
                timings: req.timings,
                venue: req.venue,
                department: req.department,
                category: req.category,
                image: req.image,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(event)))
}

/// DELETE /api/events/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    rbac::require_content_manager(&auth)?;

    let existing = state
        .event_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Event {id} not found")))?;
    rbac::ensure_department_access(&auth, &existing.department)?;

    state.event_repo.delete(id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Event deleted".to_string(),
    })))
}
