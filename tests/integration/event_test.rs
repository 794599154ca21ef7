//! Integration tests for event CRUD and role scoping.

mod helpers;

use http::StatusCode;

fn event_body(title: &str, department: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "description": "A test event",
        "date": "2026-03-14",
        "from_time": "10:00 AM",
        "to_time": "1:00 PM",
        "venue": "Main Auditorium",
        "department": department,
        "category": "technical",
    })
}

#[tokio::test]
async fn test_list_events_public() {
    let app = helpers::TestApp::new().await;
    app.create_event("Robo Race", "ECE", "technical").await;
    app.create_event("Battle of Bands", "CSE", "cultural").await;

    let response = app.request("GET", "/api/events", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["total_items"], 2);
}

#[tokio::test]
async fn test_list_events_filtered_by_department() {
    let app = helpers::TestApp::new().await;
    app.create_event("Robo Race", "ECE", "technical").await;
    app.create_event("Hackathon", "CSE", "technical").await;

    let response = app
        .request("GET", "/api/events?department=cse", None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["total_items"], 1);
    assert_eq!(response.body["data"]["items"][0]["title"], "Hackathon");
}

#[tokio::test]
async fn test_get_event_not_found() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "GET",
            "/api/events/00000000-0000-0000-0000-000000000000",
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_event_requires_auth() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("POST", "/api/events", Some(event_body("Expo", "CSE")), None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_event_as_admin() {
    let app = helpers::TestApp::new().await;
    app.create_admin("eventadmin", "password123", "admin", None)
        .await;
    let token = app.login("eventadmin", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/events",
            Some(event_body("Tech Expo", "CSE")),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["title"], "Tech Expo");
    assert_eq!(response.body["data"]["department"], "CSE");
}

#[tokio::test]
async fn test_create_event_forbidden_for_dean() {
    let app = helpers::TestApp::new().await;
    app.create_admin("deanuser", "password123", "dean", None)
        .await;
    let token = app.login("deanuser", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/events",
            Some(event_body("Dean Event", "CSE")),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_hod_creates_only_for_own_department() {
    let app = helpers::TestApp::new().await;
    app.create_admin("csehod", "password123", "hod", Some("CSE"))
        .await;
    let token = app.login("csehod", "password123").await;

    let own = app
        .request(
            "POST",
            "/api/events",
            Some(event_body("CSE Workshop", "cse")),
            Some(&token),
        )
        .await;
    assert_eq!(own.status, StatusCode::OK);

    let other = app
        .request(
            "POST",
            "/api/events",
            Some(event_body("ECE Workshop", "ECE")),
            Some(&token),
        )
        .await;
    assert_eq!(other.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_update_event_partial() {
    let app = helpers::TestApp::new().await;
    app.create_admin("updadmin", "password123", "admin", None)
        .await;
    let token = app.login("updadmin", "password123").await;
    let event_id = app.create_event("Old Title", "CSE", "technical").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/events/{event_id}"),
            Some(serde_json::json!({ "title": "New Title" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["title"], "New Title");
    // Untouched fields keep their values
    assert_eq!(response.body["data"]["department"], "CSE");
}

#[tokio::test]
async fn test_update_event_legacy_timings() {
    let app = helpers::TestApp::new().await;
    app.create_admin("timadmin", "password123", "admin", None)
        .await;
    let token = app.login("timadmin", "password123").await;
    let event_id = app.create_event("Expo", "CSE", "technical").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/events/{event_id}"),
            Some(serde_json::json!({ "timings": "10 AM - 4 PM" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["timings"], "10 AM - 4 PM");
    assert_eq!(response.body["data"]["title"], "Expo");
}

#[tokio::test]
async fn test_hod_cannot_touch_other_department_event() {
    let app = helpers::TestApp::new().await;
    app.create_admin("ecehod", "password123", "hod", Some("ECE"))
        .await;
    let token = app.login("ecehod", "password123").await;
    let event_id = app.create_event("CSE Event", "CSE", "technical").await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/events/{event_id}"),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_delete_event() {
    let app = helpers::TestApp::new().await;
    app.create_admin("deladmin", "password123", "superadmin", None)
        .await;
    let token = app.login("deladmin", "password123").await;
    let event_id = app.create_event("Doomed Event", "CSE", "technical").await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/events/{event_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let gone = app
        .request("GET", &format!("/api/events/{event_id}"), None, None)
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}
