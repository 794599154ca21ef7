//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Token TTL in hours. Also used as the auth cookie Max-Age.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_hours: u64,
    /// Name of the HTTP-only auth cookie.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Whether the auth cookie requires HTTPS.
    #[serde(default)]
    pub cookie_secure: bool,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_token_ttl() -> u64 {
    24
}

fn default_cookie_name() -> String {
    "fest_token".to_string()
}

fn default_password_min() -> usize {
    8
}
