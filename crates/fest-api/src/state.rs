//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use fest_auth::jwt::decoder::JwtDecoder;
use fest_auth::jwt::encoder::JwtEncoder;
use fest_auth::password::hasher::PasswordHasher;
use fest_core::config::AppConfig;

use fest_database::repositories::admin::AdminRepository;
use fest_database::repositories::content::ContentRepository;
use fest_database::repositories::event::EventRepository;
use fest_database::repositories::pass::PassRepository;
use fest_database::repositories::registration::RegistrationRepository;

use fest_service::auth::service::AuthService;
use fest_service::dashboard::service::DashboardService;
use fest_service::registration::service::RegistrationService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token encoder
    pub jwt_encoder: Arc<JwtEncoder>,
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Password hasher (Argon2)
    pub password_hasher: Arc<PasswordHasher>,

    // ── Repositories ─────────────────────────────────────────
    /// Admin account repository
    pub admin_repo: Arc<AdminRepository>,
    /// Event repository
    pub event_repo: Arc<EventRepository>,
    /// Pass repository
    pub pass_repo: Arc<PassRepository>,
    /// Registration repository
    pub registration_repo: Arc<RegistrationRepository>,
    /// Site content repository
    pub content_repo: Arc<ContentRepository>,

    // ── Services ─────────────────────────────────────────────
    /// Login and account setup service
    pub auth_service: Arc<AuthService>,
    /// Role-scoped dashboard statistics service
    pub dashboard_service: Arc<DashboardService>,
    /// Enrollment service
    pub registration_service: Arc<RegistrationService>,
}

impl AppState {
    /// Wires repositories, auth primitives, and services from the
    /// configuration and a connected pool.
    pub fn build(config: AppConfig, db_pool: PgPool) -> Self {
        let admin_repo = Arc::new(AdminRepository::new(db_pool.clone()));
        let event_repo = Arc::new(EventRepository::new(db_pool.clone()));
        let pass_repo = Arc::new(PassRepository::new(db_pool.clone()));
        let registration_repo = Arc::new(RegistrationRepository::new(db_pool.clone()));
        let content_repo = Arc::new(ContentRepository::new(db_pool.clone()));

        let password_hasher = Arc::new(PasswordHasher::new());
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&admin_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&jwt_encoder),
            &config.auth,
        ));
        let dashboard_service = Arc::new(DashboardService::new(
            Arc::clone(&event_repo),
            Arc::clone(&pass_repo),
            Arc::clone(&registration_repo),
        ));
        let registration_service = Arc::new(RegistrationService::new(
            Arc::clone(&registration_repo),
            Arc::clone(&pass_repo),
            Arc::clone(&event_repo),
        ));

        Self {
            config: Arc::new(config),
            db_pool,
            jwt_encoder,
            jwt_decoder,
            password_hasher,
            admin_repo,
            event_repo,
            pass_repo,
            registration_repo,
            content_repo,
            auth_service,
            dashboard_service,
            registration_service,
        }
    }
}
