//! Route definitions for the Fest Platform HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_size_bytes;

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(event_routes())
        .merge(pass_routes())
        .merge(registration_routes())
        .merge(content_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: login, logout, setup, stats, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/setup", post(handlers::auth::setup))
        .route("/auth/stats", get(handlers::auth::stats))
        .route("/auth/me", get(handlers::auth::me))
}

/// Event listing (public) and CRUD (role-guarded)
fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(handlers::event::list))
        .route("/events", post(handlers::event::create))
        .route("/events/{id}", get(handlers::event::get))
        .route("/events/{id}", put(handlers::event::update))
        .route("/events/{id}", delete(handlers::event::delete))
}

/// Pass pricing (public) and CRUD (admin)
fn pass_routes() -> Router<AppState> {
    Router::new()
        .route("/passes", get(handlers::pass::list))
        .route("/passes", post(handlers::pass::create))
        .route("/passes/{id}", put(handlers::pass::update))
        .route("/passes/{id}", delete(handlers::pass::delete))
}

/// Enrollment (public) and registration management (admin)
fn registration_routes() -> Router<AppState> {
    Router::new()
        .route("/registrations", post(handlers::registration::create))
        .route("/registrations", get(handlers::registration::list))
        .route("/registrations/{id}", get(handlers::registration::get))
        .route(
            "/registrations/{id}/payment",
            put(handlers::registration::update_payment),
        )
}

/// Sponsors, clubs, and site configuration
fn content_routes() -> Router<AppState> {
    Router::new()
        .route("/content/sponsors", get(handlers::content::list_sponsors))
        .route("/content/sponsors", post(handlers::content::create_sponsor))
        .route(
            "/content/sponsors/{id}",
            delete(handlers::content::delete_sponsor),
        )
        .route("/content/clubs", get(handlers::content::list_clubs))
        .route("/content/clubs", post(handlers::content::create_club))
        .route(
            "/content/clubs/{id}",
            delete(handlers::content::delete_club),
        )
        .route("/site-config", get(handlers::content::get_site_config))
        .route("/site-config", put(handlers::content::update_site_config))
}

/// Health check endpoint (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
