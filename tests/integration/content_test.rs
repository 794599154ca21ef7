//! Integration tests for site content: sponsors, clubs, site config, health.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_sponsor_lifecycle() {
    let app = helpers::TestApp::new().await;
    app.create_admin("sponsoradmin", "password123", "admin", None)
        .await;
    let token = app.login("sponsoradmin", "password123").await;

    let created = app
        .request(
            "POST",
            "/api/content/sponsors",
            Some(serde_json::json!({
                "name": "Acme Corp",
                "website": "https://acme.example.com",
                "sort_order": 1,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::OK);
    let sponsor_id = created.body["data"]["id"].as_str().unwrap().to_string();

    let listed = app
        .request("GET", "/api/content/sponsors", None, None)
        .await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.body["data"][0]["name"], "Acme Corp");

    let deleted = app
        .request(
            "DELETE",
            &format!("/api/content/sponsors/{sponsor_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let empty = app
        .request("GET", "/api/content/sponsors", None, None)
        .await;
    assert!(empty.body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_sponsor_create_requires_operational_role() {
    let app = helpers::TestApp::new().await;
    app.create_admin("sponsordean", "password123", "dean", None)
        .await;
    let token = app.login("sponsordean", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/content/sponsors",
            Some(serde_json::json!({ "name": "Acme Corp" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_delete_unknown_club() {
    let app = helpers::TestApp::new().await;
    app.create_admin("clubadmin", "password123", "admin", None)
        .await;
    let token = app.login("clubadmin", "password123").await;

    let response = app
        .request(
            "DELETE",
            "/api/content/clubs/00000000-0000-0000-0000-000000000000",
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_clubs_public_list() {
    let app = helpers::TestApp::new().await;
    app.create_admin("clublist", "password123", "superadmin", None)
        .await;
    let token = app.login("clublist", "password123").await;

    let created = app
        .request(
            "POST",
            "/api/content/clubs",
            Some(serde_json::json!({
                "name": "Robotics Club",
                "description": "Builds the robots",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::OK);

    let listed = app.request("GET", "/api/content/clubs", None, None).await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.body["data"][0]["name"], "Robotics Club");
}

#[tokio::test]
async fn test_site_config_update_is_partial() {
    let app = helpers::TestApp::new().await;
    app.create_admin("siteadmin", "password123", "admin", None)
        .await;
    let token = app.login("siteadmin", "password123").await;

    let updated = app
        .request(
            "PUT",
            "/api/site-config",
            Some(serde_json::json!({
                "website_name": "Fest 2026",
                "event_year": "2026",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["data"]["website_name"], "Fest 2026");

    let second = app
        .request(
            "PUT",
            "/api/site-config",
            Some(serde_json::json!({ "contact_email": "fest@college.edu" })),
            Some(&token),
        )
        .await;
    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(second.body["data"]["contact_email"], "fest@college.edu");
    // Fields absent from the request keep their values
    assert_eq!(second.body["data"]["website_name"], "Fest 2026");

    let public = app.request("GET", "/api/site-config", None, None).await;
    assert_eq!(public.status, StatusCode::OK);
    assert_eq!(public.body["data"]["event_year"], "2026");
}

#[tokio::test]
async fn test_site_config_update_requires_auth() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "PUT",
            "/api/site-config",
            Some(serde_json::json!({ "website_name": "Hacked" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_reports_database() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["database"], "connected");
}
