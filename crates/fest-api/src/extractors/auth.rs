//! `AuthAdmin` extractor — pulls the JWT from the auth cookie (or a Bearer
//! header as fallback), validates it, and loads the admin account.

use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use fest_core::error::AppError;
use fest_entity::admin::Admin;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated admin available in handlers.
#[derive(Debug, Clone)]
pub struct AuthAdmin(pub Admin);

impl std::ops::Deref for AuthAdmin {
    type Target = Admin;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Pulls the raw token from the cookie jar or the Authorization header.
fn extract_token(parts: &Parts, cookie_name: &str) -> Option<String> {
    let jar = CookieJar::from_headers(&parts.headers);
    if let Some(cookie) = jar.get(cookie_name) {
        return Some(cookie.value().to_string());
    }

    parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(String::from)
}

async fn authenticate(parts: &Parts, state: &AppState) -> Result<Admin, AppError> {
    let token = extract_token(parts, &state.config.auth.cookie_name)
        .ok_or_else(|| AppError::unauthorized("Missing authentication token"))?;

    let claims = state.jwt_decoder.decode_token(&token)?;

    // The account may have been deleted or re-roled since issuance; the
    // database row is authoritative.
    state
        .admin_repo
        .find_by_id(claims.admin_id())
        .await?
        .ok_or_else(|| AppError::unauthorized("Account no longer exists"))
}

impl FromRequestParts<AppState> for AuthAdmin {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let admin = authenticate(parts, state).await?;
        Ok(AuthAdmin(admin))
    }
}

impl OptionalFromRequestParts<AppState> for AuthAdmin {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Option<Self>, Self::Rejection> {
        if extract_token(parts, &state.config.auth.cookie_name).is_none() {
            return Ok(None);
        }
        let admin = authenticate(parts, state).await?;
        Ok(Some(AuthAdmin(admin)))
    }
}
