//! CORS middleware configuration.

use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

/// Custom header carrying the admin create-user token.
pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

/// Create a CORS layer from configuration.
///
/// With no configured origins (dev mode) any origin is allowed without
/// credentials; with explicit origins, credentials are allowed.
pub fn create_cors_layer(origins: &[String]) -> CorsLayer {
    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ];

    let parsed_origins: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();

    if parsed_origins.is_empty() {
        CorsLayer::new()
            .allow_methods(methods)
            .allow_headers(Any)
            .allow_origin(Any)
    } else {
        CorsLayer::new()
            .allow_methods(methods)
            .allow_headers([
                AUTHORIZATION,
                CONTENT_TYPE,
                ACCEPT,
                ADMIN_TOKEN_HEADER.parse().expect("valid header name"),
            ])
            .allow_credentials(true)
            .allow_origin(parsed_origins)
    }
}
