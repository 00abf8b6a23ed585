//! Middleware for the Web API.

mod auth;
mod cors;

pub use auth::{session_auth, AuthUser};
pub use cors::{create_cors_layer, ADMIN_TOKEN_HEADER};
