//! Integration tests for user management endpoints

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_user_success() {
    let app = common::TestApp::new().await;
    let cookie = app.authenticated_session().await;

    let email = format!("new_{}@example.com", uuid::Uuid::new_v4().simple());
    let body = json!({ "name": "Bernard", "email": email, "password": "quayside" });

    let response = app
        .request("POST", "/api/v1/users", Some(&cookie), Some(body))
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let profile = response.json();
    assert_eq!(profile["name"], "Bernard");
    assert_eq!(profile["email"], email.as_str());
    assert!(profile.get("password_hash").is_none());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_duplicate_email_rejected() {
    let app = common::TestApp::new().await;
    let cookie = app.authenticated_session().await;

    let email = format!("dup_{}@example.com", uuid::Uuid::new_v4().simple());
    let body = json!({ "name": "Bernard", "email": email, "password": "quayside" });

    let first = app
        .request("POST", "/api/v1/users", Some(&cookie), Some(body.clone()))
        .await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = app
        .request("POST", "/api/v1/users", Some(&cookie), Some(body))
        .await;
    assert_eq!(second.status, StatusCode::BAD_REQUEST);
    assert_eq!(second.json()["error"]["code"], "DUPLICATE_KEY");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_get_missing_user_is_404() {
    let app = common::TestApp::new().await;
    let cookie = app.authenticated_session().await;

    let response = app
        .request(
            "GET",
            &format!("/api/v1/users/{}", uuid::Uuid::new_v4()),
            Some(&cookie),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json()["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_partial_update_without_password_keeps_old_password() {
    let app = common::TestApp::new().await;
    let cookie = app.authenticated_session().await;

    let email = format!("keep_{}@example.com", uuid::Uuid::new_v4().simple());
    app.seed_user("Colette", &email, "original-pass").await;

    let created = app
        .request("GET", "/api/v1/users", Some(&cookie), None)
        .await;
    let id = created.json()
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["email"] == email.as_str())
        .unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string();

    // Rename only; password field absent
    let response = app
        .request(
            "PUT",
            &format!("/api/v1/users/{}", id),
            Some(&cookie),
            Some(json!({ "name": "Chantal" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["name"], "Chantal");

    // Old password still valid
    let _fresh_cookie = app.login(&email, "original-pass").await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_update_with_password_rehashes() {
    let app = common::TestApp::new().await;
    let cookie = app.authenticated_session().await;

    let email = format!("rehash_{}@example.com", uuid::Uuid::new_v4().simple());
    app.seed_user("Colette", &email, "before-pass").await;

    let listed = app
        .request("GET", "/api/v1/users", Some(&cookie), None)
        .await;
    let id = listed.json()
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["email"] == email.as_str())
        .unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .request(
            "PUT",
            &format!("/api/v1/users/{}", id),
            Some(&cookie),
            Some(json!({ "password": "after-pass" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // New password works, old one is a generic 401
    let _fresh_cookie = app.login(&email, "after-pass").await;
    let old = app
        .request(
            "POST",
            "/api/v1/auth/login",
            None,
            Some(json!({ "email": email, "password": "before-pass" })),
        )
        .await;
    assert_eq!(old.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_delete_user() {
    let app = common::TestApp::new().await;
    let cookie = app.authenticated_session().await;

    let email = format!("gone_{}@example.com", uuid::Uuid::new_v4().simple());
    let created = app
        .request(
            "POST",
            "/api/v1/users",
            Some(&cookie),
            Some(json!({ "name": "Bernard", "email": email, "password": "quayside" })),
        )
        .await;
    let id = created.json()["id"].as_str().unwrap().to_string();

    let deleted = app
        .request(
            "DELETE",
            &format!("/api/v1/users/{}", id),
            Some(&cookie),
            None,
        )
        .await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let missing = app
        .request(
            "GET",
            &format!("/api/v1/users/{}", id),
            Some(&cookie),
            None,
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}
