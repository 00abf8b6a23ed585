//! Web API Authentication Tests
//!
//! Integration tests for login, logout, identity, and admin user creation.

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

use common::{
    admin_header, auth_header, bearer, create_and_login, create_test_server,
    create_test_server_with_ttl, create_test_user, login_test_user, ADMIN_TOKEN,
};

// ============================================================================
// Admin create-user
// ============================================================================

#[tokio::test]
async fn test_create_user_success() {
    let server = create_test_server().await;

    let response = server
        .post("/api/admin/create-user")
        .add_header(admin_header(), ADMIN_TOKEN)
        .json(&json!({ "username": "alice" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(body["data"]["user"]["username"], "alice");
    assert!(body["data"]["user"]["id"].is_i64());

    // A generated password is returned exactly once
    let password = body["data"]["password"].as_str().unwrap();
    assert_eq!(password.len(), 12);
}

#[tokio::test]
async fn test_create_user_password_not_stored_in_plain() {
    let server = create_test_server().await;

    let (_, password) = create_test_user(&server, "alice").await;

    // The generated password logs the user in, which it could not if the
    // stored value were compared to anything but its hash
    let token = login_test_user(&server, "alice", &password).await;
    assert!(!token.is_empty());
}

#[tokio::test]
async fn test_create_user_duplicate_username() {
    let server = create_test_server().await;

    create_test_user(&server, "alice").await;

    let response = server
        .post("/api/admin/create-user")
        .add_header(admin_header(), ADMIN_TOKEN)
        .json(&json!({ "username": "alice" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn test_create_user_empty_username() {
    let server = create_test_server().await;

    let response = server
        .post("/api/admin/create-user")
        .add_header(admin_header(), ADMIN_TOKEN)
        .json(&json!({ "username": "" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_user_requires_admin_token() {
    let server = create_test_server().await;

    // Missing token
    let response = server
        .post("/api/admin/create-user")
        .json(&json!({ "username": "alice" }))
        .await;
    response.assert_status(StatusCode::FORBIDDEN);

    // Wrong token
    let response = server
        .post("/api/admin/create-user")
        .add_header(admin_header(), "wrong-token")
        .json(&json!({ "username": "alice" }))
        .await;
    response.assert_status(StatusCode::FORBIDDEN);
}

// ============================================================================
// Login
// ============================================================================

#[tokio::test]
async fn test_login_success() {
    let server = create_test_server().await;

    let (user_id, password) = create_test_user(&server, "alice").await;

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "username": "alice", "password": password }))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert!(body["data"]["token"].is_string());
    assert_eq!(body["data"]["user"]["id"], user_id);
    assert_eq!(body["data"]["user"]["username"], "alice");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let server = create_test_server().await;

    create_test_user(&server, "alice").await;

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "username": "alice", "password": "not-the-password" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_unknown_user_same_error_as_wrong_password() {
    let server = create_test_server().await;

    let (_, password) = create_test_user(&server, "alice").await;

    let wrong_password = server
        .post("/api/auth/login")
        .json(&json!({ "username": "alice", "password": "not-the-password" }))
        .await;
    wrong_password.assert_status(StatusCode::UNAUTHORIZED);

    let unknown_user = server
        .post("/api/auth/login")
        .json(&json!({ "username": "nobody", "password": password }))
        .await;
    unknown_user.assert_status(StatusCode::UNAUTHORIZED);

    // Uniform message: no username probing via error text
    let a: Value = wrong_password.json();
    let b: Value = unknown_user.json();
    assert_eq!(a["error"]["message"], b["error"]["message"]);
}

#[tokio::test]
async fn test_login_missing_fields() {
    let server = create_test_server().await;

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "username": "", "password": "" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

// ============================================================================
// Token usage / me / logout
// ============================================================================

#[tokio::test]
async fn test_token_authorizes_protected_calls() {
    let server = create_test_server().await;

    let (token, user_id) = create_and_login(&server, "alice").await;

    let response = server
        .get("/api/auth/me")
        .add_header(auth_header(), bearer(&token))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["data"]["user"]["id"], user_id);
    assert_eq!(body["data"]["user"]["username"], "alice");
}

#[tokio::test]
async fn test_protected_call_without_token() {
    let server = create_test_server().await;

    let response = server.get("/api/auth/me").await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    let response = server.get("/api/spark-jobs").await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_call_with_garbage_token() {
    let server = create_test_server().await;

    let response = server
        .get("/api/auth/me")
        .add_header(auth_header(), bearer("deadbeef"))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_then_reuse_token() {
    let server = create_test_server().await;

    let (token, _) = create_and_login(&server, "alice").await;

    let response = server
        .post("/api/auth/logout")
        .add_header(auth_header(), bearer(&token))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["data"]["message"], "Logged out successfully");

    // The old token no longer authorizes anything
    let response = server
        .get("/api/auth/me")
        .add_header(auth_header(), bearer(&token))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    // Logging out again with the dead token is also unauthorized
    let response = server
        .post("/api/auth/logout")
        .add_header(auth_header(), bearer(&token))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_session_is_unauthorized() {
    // TTL of zero: sessions are expired the moment they are created
    let server = create_test_server_with_ttl(0).await;

    let (_, password) = create_test_user(&server, "alice").await;
    let token = login_test_user(&server, "alice", &password).await;

    let response = server
        .get("/api/auth/me")
        .add_header(auth_header(), bearer(&token))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = create_test_server().await;

    let response = server.get("/health").await;
    response.assert_status_ok();
    assert_eq!(response.text(), "OK");
}
