//! Integration tests for pass listing and CRUD.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_public_list_hides_inactive_passes() {
    let app = helpers::TestApp::new().await;
    app.create_pass("Gold", 500, true).await;
    app.create_pass("Retired", 300, false).await;

    let response = app.request("GET", "/api/passes", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    let passes = response.body["data"].as_array().unwrap();
    assert_eq!(passes.len(), 1);
    assert_eq!(passes[0]["name"], "Gold");
}

#[tokio::test]
async fn test_include_inactive_ignored_without_auth() {
    let app = helpers::TestApp::new().await;
    app.create_pass("Gold", 500, true).await;
    app.create_pass("Retired", 300, false).await;

    let response = app
        .request("GET", "/api/passes?include_inactive=true", None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_admin_sees_inactive_passes() {
    let app = helpers::TestApp::new().await;
    app.create_admin("passadmin", "password123", "admin", None)
        .await;
    let token = app.login("passadmin", "password123").await;
    app.create_pass("Gold", 500, true).await;
    app.create_pass("Retired", 300, false).await;

    let response = app
        .request(
            "GET",
            "/api/passes?include_inactive=true",
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_passes_sorted_by_price() {
    let app = helpers::TestApp::new().await;
    app.create_pass("Platinum", 1000, true).await;
    app.create_pass("Silver", 250, true).await;
    app.create_pass("Gold", 500, true).await;

    let response = app.request("GET", "/api/passes", None, None).await;

    let passes = response.body["data"].as_array().unwrap();
    let prices: Vec<i64> = passes.iter().map(|p| p["price"].as_i64().unwrap()).collect();
    assert_eq!(prices, vec![250, 500, 1000]);
}

#[tokio::test]
async fn test_create_pass_forbidden_for_hod() {
    let app = helpers::TestApp::new().await;
    app.create_admin("hodpass", "password123", "hod", Some("CSE"))
        .await;
    let token = app.login("hodpass", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/passes",
            Some(serde_json::json!({
                "name": "Sneaky Pass",
                "price": 100,
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_create_and_update_pass() {
    let app = helpers::TestApp::new().await;
    app.create_admin("passcrud", "password123", "superadmin", None)
        .await;
    let token = app.login("passcrud", "password123").await;

    let created = app
        .request(
            "POST",
            "/api/passes",
            Some(serde_json::json!({
                "name": "Gold",
                "price": 500,
                "perks": ["All events", "Food coupon"],
                "color": "gold",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::OK);
    assert_eq!(created.body["data"]["pass_type"], "Individual");

    let pass_id = created.body["data"]["id"].as_str().unwrap().to_string();

    let updated = app
        .request(
            "PUT",
            &format!("/api/passes/{pass_id}"),
            Some(serde_json::json!({ "price": 600 })),
            Some(&token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["data"]["price"], 600);
    assert_eq!(updated.body["data"]["name"], "Gold");
}

#[tokio::test]
async fn test_delete_pass_without_registrations_removes_it() {
    let app = helpers::TestApp::new().await;
    app.create_admin("passdel", "password123", "admin", None)
        .await;
    let token = app.login("passdel", "password123").await;
    let pass_id = app.create_pass("Unused", 200, true).await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/passes/{pass_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let list = app
        .request(
            "GET",
            "/api/passes?include_inactive=true",
            None,
            Some(&token),
        )
        .await;
    assert!(list.body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_pass_with_registrations_deactivates() {
    let app = helpers::TestApp::new().await;
    app.create_admin("passsoft", "password123", "admin", None)
        .await;
    let token = app.login("passsoft", "password123").await;
    let pass_id = app.create_pass("Popular", 500, true).await;
    app.create_registration(
        "Asha",
        "CSE",
        "2",
        Some(pass_id),
        "500/-",
        "completed",
        &[],
    )
    .await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/passes/{pass_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let list = app
        .request(
            "GET",
            "/api/passes?include_inactive=true",
            None,
            Some(&token),
        )
        .await;
    let passes = list.body["data"].as_array().unwrap();
    assert_eq!(passes.len(), 1);
    assert_eq!(passes[0]["is_active"], false);
}
