//! Login and initial account setup flows.

use std::sync::Arc;

use tracing::{info, warn};

use fest_auth::jwt::{IssuedToken, JwtEncoder};
use fest_auth::password::PasswordHasher;
use fest_core::config::AuthConfig;
use fest_core::error::AppError;
use fest_database::repositories::admin::AdminRepository;
use fest_entity::admin::{Admin, AdminRole, CreateAdmin};

/// Handles admin login and account provisioning.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// Admin account repository.
    admin_repo: Arc<AdminRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Token encoder.
    encoder: Arc<JwtEncoder>,
    /// Minimum password length for new accounts.
    password_min_length: usize,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The authenticated admin.
    pub admin: Admin,
    /// The issued session token.
    pub token: IssuedToken,
}

/// Data for creating an admin account.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SetupRequest {
    /// Login username.
    pub username: String,
    /// Plaintext password.
    pub password: String,
    /// Role; defaults to superadmin when omitted.
    pub role: Option<AdminRole>,
    /// Department, required for HOD accounts to get scoped stats.
    pub department: Option<String>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        admin_repo: Arc<AdminRepository>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
        config: &AuthConfig,
    ) -> Self {
        Self {
            admin_repo,
            hasher,
            encoder,
            password_min_length: config.password_min_length,
        }
    }

    /// Authenticates an admin and issues a session token.
    ///
    /// Unknown usernames and wrong passwords both yield the same generic
    /// 401 so the response does not reveal which accounts exist.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, AppError> {
        let admin = match self.admin_repo.find_by_username(username).await? {
            Some(admin) => admin,
            None => {
                warn!(username = %username, "Login attempt for unknown username");
                return Err(AppError::unauthorized("Invalid username or password"));
            }
        };

        let valid = self
            .hasher
            .verify_password(password, &admin.password_hash)?;
        if !valid {
            warn!(admin_id = %admin.id, "Login attempt with wrong password");
            return Err(AppError::unauthorized("Invalid username or password"));
        }

        let token = self.encoder.generate_token(&admin)?;
        self.admin_repo.update_last_login(admin.id).await?;

        info!(admin_id = %admin.id, role = %admin.role, "Admin logged in");

        Ok(LoginOutcome { admin, token })
    }

    /// Creates an admin account. Duplicate usernames are a 409 conflict.
    pub async fn setup(&self, req: SetupRequest) -> Result<Admin, AppError> {
        let username = req.username.trim();
        if username.is_empty() {
            return Err(AppError::validation("Username cannot be empty"));
        }
        if req.password.len() < self.password_min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                self.password_min_length
            )));
        }

        let role = req.role.unwrap_or(AdminRole::Superadmin);
        if role.is_department_scoped() && req.department.is_none() {
            return Err(AppError::validation(
                "A department is required for HOD accounts",
            ));
        }

        let password_hash = self.hasher.hash_password(&req.password)?;
        let admin = self
            .admin_repo
            .create(&CreateAdmin {
                username: username.to_string(),
                password_hash,
                role,
                department: req.department,
            })
            .await?;

        info!(admin_id = %admin.id, role = %admin.role, "Admin account created");

        Ok(admin)
    }

    /// Loads the authenticated admin's profile.
    pub async fn profile(&self, admin_id: uuid::Uuid) -> Result<Admin, AppError> {
        self.admin_repo
            .find_by_id(admin_id)
            .await?
            .ok_or_else(|| AppError::unauthorized("Account no longer exists"))
    }
}
