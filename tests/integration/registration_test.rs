//! Integration tests for participant enrollment and payment management.

mod helpers;

use http::StatusCode;
use uuid::Uuid;

fn enroll_body(pass_id: Option<Uuid>, event_ids: Vec<Uuid>) -> serde_json::Value {
    serde_json::json!({
        "name": "Asha Rao",
        "email": "asha.rao@example.com",
        "phone": "9876543210",
        "department": "CSE",
        "year": "2",
        "pass_id": pass_id,
        "event_ids": event_ids,
    })
}

#[tokio::test]
async fn test_enroll_with_pass_and_events() {
    let app = helpers::TestApp::new().await;
    let pass_id = app.create_pass("Gold", 500, true).await;
    let event_id = app.create_event("Hackathon", "CSE", "technical").await;

    let response = app
        .request(
            "POST",
            "/api/registrations",
            Some(enroll_body(Some(pass_id), vec![event_id])),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["amount"], "500/-");
    assert_eq!(response.body["data"]["payment_status"], "pending");
    assert_eq!(response.body["data"]["name"], "Asha Rao");
}

#[tokio::test]
async fn test_enroll_events_only_has_zero_amount() {
    let app = helpers::TestApp::new().await;
    let event_id = app.create_event("Quiz", "ECE", "technical").await;

    let response = app
        .request(
            "POST",
            "/api/registrations",
            Some(enroll_body(None, vec![event_id])),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["amount"], "0/-");
}

#[tokio::test]
async fn test_enroll_rejects_inactive_pass() {
    let app = helpers::TestApp::new().await;
    let pass_id = app.create_pass("Retired", 300, false).await;

    let response = app
        .request(
            "POST",
            "/api/registrations",
            Some(enroll_body(Some(pass_id), vec![])),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_enroll_unknown_pass() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/registrations",
            Some(enroll_body(Some(Uuid::new_v4()), vec![])),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_enroll_unknown_event() {
    let app = helpers::TestApp::new().await;
    let pass_id = app.create_pass("Gold", 500, true).await;

    let response = app
        .request(
            "POST",
            "/api/registrations",
            Some(enroll_body(Some(pass_id), vec![Uuid::new_v4()])),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_enroll_requires_pass_or_events() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/registrations",
            Some(enroll_body(None, vec![])),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_registrations_requires_operational_role() {
    let app = helpers::TestApp::new().await;
    app.create_admin("listhod", "password123", "hod", Some("CSE"))
        .await;
    let token = app.login("listhod", "password123").await;

    let unauth = app.request("GET", "/api/registrations", None, None).await;
    assert_eq!(unauth.status, StatusCode::UNAUTHORIZED);

    let forbidden = app
        .request("GET", "/api/registrations", None, Some(&token))
        .await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_list_registrations_filtered_by_status() {
    let app = helpers::TestApp::new().await;
    app.create_admin("listadmin", "password123", "admin", None)
        .await;
    let token = app.login("listadmin", "password123").await;
    app.create_registration("Asha", "CSE", "2", None, "0/-", "completed", &[])
        .await;
    app.create_registration("Ravi", "ECE", "3", None, "0/-", "pending", &[])
        .await;

    let response = app
        .request(
            "GET",
            "/api/registrations?payment_status=completed",
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["total_items"], 1);
    assert_eq!(response.body["data"]["items"][0]["name"], "Asha");
}

#[tokio::test]
async fn test_registration_detail_includes_events_and_pass() {
    let app = helpers::TestApp::new().await;
    app.create_admin("detadmin", "password123", "admin", None)
        .await;
    let token = app.login("detadmin", "password123").await;
    let pass_id = app.create_pass("Gold", 500, true).await;
    let event_id = app.create_event("Hackathon", "CSE", "technical").await;
    let reg_id = app
        .create_registration(
            "Asha",
            "CSE",
            "2",
            Some(pass_id),
            "500/-",
            "pending",
            &[event_id],
        )
        .await;

    let response = app
        .request(
            "GET",
            &format!("/api/registrations/{reg_id}"),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["registration"]["name"], "Asha");
    assert_eq!(response.body["data"]["pass"]["name"], "Gold");
    let events = response.body["data"]["events"].as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["title"], "Hackathon");
}

#[tokio::test]
async fn test_update_payment_status() {
    let app = helpers::TestApp::new().await;
    app.create_admin("payadmin", "password123", "superadmin", None)
        .await;
    let token = app.login("payadmin", "password123").await;
    let reg_id = app
        .create_registration("Ravi", "ECE", "3", None, "0/-", "pending", &[])
        .await;

    let response = app
        .request(
            "PUT",
            &format!("/api/registrations/{reg_id}/payment"),
            Some(serde_json::json!({
                "payment_status": "completed",
                "payment_ref": "upi-TX1234",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["payment_status"], "completed");
    assert_eq!(response.body["data"]["payment_ref"], "upi-TX1234");
}
