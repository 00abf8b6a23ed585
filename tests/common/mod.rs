//! Test helpers for Web API integration tests.

use std::sync::Arc;

use axum::http::header::AUTHORIZATION;
use axum::http::HeaderName;
use axum_test::TestServer;
use serde_json::{json, Value};

use lakeadmin::web::handlers::AppState;
use lakeadmin::web::router::{create_health_router, create_router};
use lakeadmin::Database;

/// Admin token configured for test servers.
pub const ADMIN_TOKEN: &str = "test-admin-token";

/// Header carrying the admin token.
pub fn admin_header() -> HeaderName {
    HeaderName::from_static("x-admin-token")
}

/// Create a test server with an in-memory database.
pub async fn create_test_server() -> TestServer {
    create_test_server_with_ttl(3600).await
}

/// Create a test server with a custom session TTL in seconds.
pub async fn create_test_server_with_ttl(session_ttl_secs: u64) -> TestServer {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");

    let app_state = Arc::new(AppState::new(
        Arc::new(db),
        session_ttl_secs,
        Some(ADMIN_TOKEN.to_string()),
    ));

    let router = create_router(app_state, &[]).merge(create_health_router());

    TestServer::new(router).expect("Failed to create test server")
}

/// Create an operator account via the admin endpoint.
///
/// Returns (user id, generated password).
pub async fn create_test_user(server: &TestServer, username: &str) -> (i64, String) {
    let response = server
        .post("/api/admin/create-user")
        .add_header(admin_header(), ADMIN_TOKEN)
        .json(&json!({ "username": username }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let body: Value = response.json();
    let user_id = body["data"]["user"]["id"].as_i64().expect("user id");
    let password = body["data"]["password"]
        .as_str()
        .expect("generated password")
        .to_string();

    (user_id, password)
}

/// Log in and return the session token.
pub async fn login_test_user(server: &TestServer, username: &str, password: &str) -> String {
    let response = server
        .post("/api/auth/login")
        .json(&json!({ "username": username, "password": password }))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    body["data"]["token"].as_str().expect("token").to_string()
}

/// Create an operator account and log it in; returns (token, user id).
pub async fn create_and_login(server: &TestServer, username: &str) -> (String, i64) {
    let (user_id, password) = create_test_user(server, username).await;
    let token = login_test_user(server, username, &password).await;
    (token, user_id)
}

/// Format a bearer authorization header value.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Name of the authorization header, re-exported for tests.
pub fn auth_header() -> axum::http::HeaderName {
    AUTHORIZATION
}
