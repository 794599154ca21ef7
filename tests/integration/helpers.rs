//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use chrono::NaiveDate;
use http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use fest_core::config::AppConfig;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application
    pub async fn new() -> Self {
        let config = AppConfig::load("test").expect("Failed to load test config");

        let db_pool = fest_database::connection::create_pool(&config.database)
            .await
            .expect("Failed to connect to test database");

        fest_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        Self::clean_database(&db_pool).await;

        let app_state = fest_api::state::AppState::build(config.clone(), db_pool.clone());
        let router = fest_api::router::build_router(app_state);

        Self {
            router,
            db_pool,
            config,
        }
    }

    /// Clean all test data from the database
    async fn clean_database(pool: &PgPool) {
        let tables = [
            "registration_events",
            "registrations",
            "passes",
            "events",
            "sponsors",
            "clubs",
            "admins",
        ];

        for table in &tables {
            let query = format!("DELETE FROM {}", table);
            let _ = sqlx::query(&query).execute(pool).await;
        }
    }

    /// Create an admin account directly and return its ID
    pub async fn create_admin(
        &self,
        username: &str,
        password: &str,
        role: &str,
        department: Option<&str>,
    ) -> Uuid {
        let hasher = fest_auth::password::hasher::PasswordHasher::new();
        let hash = hasher
            .hash_password(password)
            .expect("Failed to hash password");
        let id = Uuid::new_v4();

        sqlx::query(
            r#"INSERT INTO admins (id, username, password_hash, role, department)
               VALUES ($1, $2, $3, $4::admin_role, $5)"#,
        )
        .bind(id)
        .bind(username)
        .bind(&hash)
        .bind(role)
        .bind(department)
        .execute(&self.db_pool)
        .await
        .expect("Failed to create test admin");

        id
    }

    /// Insert an event directly and return its ID
    pub async fn create_event(&self, title: &str, department: &str, category: &str) -> Uuid {
        let id = Uuid::new_v4();
        let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();

        sqlx::query(
            r#"INSERT INTO events (id, title, date, venue, department, category)
               VALUES ($1, $2, $3, 'Main Auditorium', $4, $5)"#,
        )
        .bind(id)
        .bind(title)
        .bind(date)
        .bind(department)
        .bind(category)
        .execute(&self.db_pool)
        .await
        .expect("Failed to create test event");

        id
    }

    /// Insert a pass directly and return its ID
    pub async fn create_pass(&self, name: &str, price: i32, is_active: bool) -> Uuid {
        let id = Uuid::new_v4();

        sqlx::query(
            r#"INSERT INTO passes (id, name, price, perks, is_active)
               VALUES ($1, $2, $3, '{"Entry to all events"}', $4)"#,
        )
        .bind(id)
        .bind(name)
        .bind(price)
        .bind(is_active)
        .execute(&self.db_pool)
        .await
        .expect("Failed to create test pass");

        id
    }

    /// Insert a registration directly and return its ID
    pub async fn create_registration(
        &self,
        name: &str,
        department: &str,
        year: &str,
        pass_id: Option<Uuid>,
        amount: &str,
        payment_status: &str,
        event_ids: &[Uuid],
    ) -> Uuid {
        let id = Uuid::new_v4();

        sqlx::query(
            r#"INSERT INTO registrations
                   (id, name, email, department, year, pass_id, amount, payment_status)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8::payment_status)"#,
        )
        .bind(id)
        .bind(name)
        .bind(format!("{}@test.com", name.replace(' ', ".").to_lowercase()))
        .bind(department)
        .bind(year)
        .bind(pass_id)
        .bind(amount)
        .bind(payment_status)
        .execute(&self.db_pool)
        .await
        .expect("Failed to create test registration");

        for event_id in event_ids {
            sqlx::query(
                "INSERT INTO registration_events (registration_id, event_id) VALUES ($1, $2)",
            )
            .bind(id)
            .bind(event_id)
            .execute(&self.db_pool)
            .await
            .expect("Failed to link test registration event");
        }

        id
    }

    /// Login and return the JWT session token
    pub async fn login(&self, username: &str, password: &str) -> String {
        let body = serde_json::json!({
            "username": username,
            "password": password,
        });

        let response = self
            .request("POST", "/api/auth/login", Some(body), None)
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response.body["data"]["token"]
            .as_str()
            .expect("No token in login response")
            .to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers (for cookie assertions)
    pub headers: HeaderMap,
    /// Parsed JSON body
    pub body: Value,
}
