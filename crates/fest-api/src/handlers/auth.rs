//! Auth handlers — login, logout, setup, me, stats.

use axum::Json;
use axum::extract::State;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use validator::Validate;

use fest_core::config::AuthConfig;
use fest_service::auth::SetupRequest;
use fest_service::dashboard::DashboardStats;

use crate::dto::request::{LoginRequest, SetupAdminRequest};
use crate::dto::response::{AdminResponse, ApiResponse, LoginResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthAdmin;
use crate::state::AppState;

/// Builds the HTTP-only session cookie carrying the JWT.
fn auth_cookie(config: &AuthConfig, token: String) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), token))
        .path("/")
        .http_only(true)
        .secure(config.cookie_secure)
        .same_site(SameSite::Strict)
        .max_age(time::Duration::hours(config.token_ttl_hours as i64))
        .build()
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<ApiResponse<LoginResponse>>), ApiError> {
    req.validate()?;

    let outcome = state
        .auth_service
        .login(&req.username, &req.password)
        .await?;

    let jar = jar.add(auth_cookie(
        &state.config.auth,
        outcome.token.token.clone(),
    ));

    Ok((
        jar,
        Json(ApiResponse::ok(LoginResponse {
            token: outcome.token.token,
            expires_at: outcome.token.expires_at,
            admin: AdminResponse::from(&outcome.admin),
        })),
    ))
}

/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<ApiResponse<MessageResponse>>), ApiError> {
    let removal = Cookie::build((state.config.auth.cookie_name.clone(), ""))
        .path("/")
        .build();
    let jar = jar.remove(removal);

    Ok((
        jar,
        Json(ApiResponse::ok(MessageResponse {
            message: "Logged out successfully".to_string(),
        })),
    ))
}

/// POST /api/auth/setup
pub async fn setup(
    State(state): State<AppState>,
    Json(req): Json<SetupAdminRequest>,
) -> Result<Json<ApiResponse<AdminResponse>>, ApiError> {
    req.validate()?;

    let role = match req.role.as_deref() {
        Some(role) => Some(role.parse()?),
        None => None,
    };

    let admin = state
        .auth_service
        .setup(SetupRequest {
            username: req.username,
            password: req.password,
            role,
            department: req.department,
        })
        .await?;

    Ok(Json(ApiResponse::ok(AdminResponse::from(&admin))))
}

/// GET /api/auth/me
pub async fn me(auth: AuthAdmin) -> Json<ApiResponse<AdminResponse>> {
    Json(ApiResponse::ok(AdminResponse::from(&auth.0)))
}

/// GET /api/auth/stats
pub async fn stats(
    State(state): State<AppState>,
    auth: AuthAdmin,
) -> Result<Json<ApiResponse<DashboardStats>>, ApiError> {
    let stats = state.dashboard_service.stats_for(&auth.0).await?;
    Ok(Json(ApiResponse::ok(stats)))
}
