//! Integration tests for the role-scoped dashboard statistics.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_stats_requires_auth() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/auth/stats", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_superadmin_gets_operational_view() {
    let app = helpers::TestApp::new().await;
    app.create_admin("superstats", "password123", "superadmin", None)
        .await;
    let token = app.login("superstats", "password123").await;

    app.create_event("Hackathon", "CSE", "technical").await;
    app.create_event("Robo Race", "ECE", "technical").await;
    app.create_pass("Gold", 500, true).await;
    app.create_registration("Asha", "CSE", "2", None, "500/-", "completed", &[])
        .await;
    app.create_registration("Ravi", "ECE", "3", None, "300/-", "completed", &[])
        .await;

    let response = app
        .request("GET", "/api/auth/stats", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["view"], "operational");
    assert_eq!(data["total_events"], 2);
    assert_eq!(data["total_registrations"], 2);
    assert_eq!(data["total_passes"], 1);
    assert!(data["recent_registrations"].as_array().unwrap().len() <= 5);
}

#[tokio::test]
async fn test_revenue_counts_only_completed_payments() {
    let app = helpers::TestApp::new().await;
    app.create_admin("revadmin", "password123", "admin", None)
        .await;
    let token = app.login("revadmin", "password123").await;

    app.create_registration("Asha", "CSE", "2", None, "500/-", "completed", &[])
        .await;
    app.create_registration("Ravi", "ECE", "3", None, "250/-", "completed", &[])
        .await;
    app.create_registration("Kiran", "MECH", "1", None, "999/-", "pending", &[])
        .await;

    let response = app
        .request("GET", "/api/auth/stats", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["total_revenue"], 750.0);
}

#[tokio::test]
async fn test_revenue_treats_unparseable_amounts_as_zero() {
    let app = helpers::TestApp::new().await;
    app.create_admin("legacyrev", "password123", "admin", None)
        .await;
    let token = app.login("legacyrev", "password123").await;

    app.create_registration("Asha", "CSE", "2", None, "500/-", "completed", &[])
        .await;
    // Legacy rows sometimes carry non-numeric amounts
    app.create_registration("Ravi", "ECE", "3", None, "free", "completed", &[])
        .await;

    let response = app
        .request("GET", "/api/auth/stats", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["total_revenue"], 500.0);
    assert_eq!(response.body["data"]["total_registrations"], 2);
}

#[tokio::test]
async fn test_dean_gets_overview() {
    let app = helpers::TestApp::new().await;
    app.create_admin("deanstats", "password123", "dean", None)
        .await;
    let token = app.login("deanstats", "password123").await;

    app.create_event("Hackathon", "CSE", "technical").await;
    app.create_event("Battle of Bands", "CSE", "cultural").await;
    app.create_registration("Asha", "CSE", "2", None, "500/-", "completed", &[])
        .await;

    let response = app
        .request("GET", "/api/auth/stats", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["view"], "overview");
    assert_eq!(data["total_events"], 2);
    assert!(data["department_stats"].is_array());
    assert!(data["registration_pie"].is_array());

    let events_pie = data["events_pie"].as_array().unwrap();
    assert_eq!(events_pie.len(), 2);
}

#[tokio::test]
async fn test_principal_gets_overview() {
    let app = helpers::TestApp::new().await;
    app.create_admin("principalstats", "password123", "principal", None)
        .await;
    let token = app.login("principalstats", "password123").await;

    let response = app
        .request("GET", "/api/auth/stats", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["view"], "overview");
}

#[tokio::test]
async fn test_hod_gets_department_view() {
    let app = helpers::TestApp::new().await;
    app.create_admin("hodstats", "password123", "hod", Some("CSE"))
        .await;
    let token = app.login("hodstats", "password123").await;

    let cse_event = app.create_event("Hackathon", "cse", "technical").await;
    app.create_event("Robo Race", "ECE", "technical").await;
    app.create_registration("Asha", "CSE", "2", None, "0/-", "completed", &[cse_event])
        .await;
    app.create_registration("Ravi", "ECE", "3", None, "0/-", "completed", &[])
        .await;

    let response = app
        .request("GET", "/api/auth/stats", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["view"], "department");
    assert_eq!(data["department"], "CSE");
    // Department match is case-insensitive, so the lowercase event counts
    assert_eq!(data["total_events"], 1);
    assert_eq!(data["total_participants"], 1);

    let events = data["events"].as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["title"], "Hackathon");
}

#[tokio::test]
async fn test_hod_without_department_is_rejected() {
    let app = helpers::TestApp::new().await;
    app.create_admin("hodempty", "password123", "hod", None)
        .await;
    let token = app.login("hodempty", "password123").await;

    let response = app
        .request("GET", "/api/auth/stats", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
