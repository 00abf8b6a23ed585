//! Session token authentication middleware.

use axum::{
    body::Body,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, Request},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::auth::{Session, SessionStore};
use crate::web::error::ApiError;

/// Extractor for authenticated requests.
///
/// Use this extractor to require authentication for a handler. The handler
/// receives the resolved session (user id, username, token) when the bearer
/// token maps to a live session.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Session);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            // Extract the bearer token from the Authorization header
            let token = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .and_then(|header| header.strip_prefix("Bearer "))
                .ok_or_else(|| ApiError::unauthorized("Authentication required"))?;

            // Get the session store from extensions (set by middleware)
            let store = parts
                .extensions
                .get::<Arc<SessionStore>>()
                .ok_or_else(|| ApiError::internal("Session store not configured"))?;

            // Resolve the token; expired tokens read as absent
            let session = store.get(token).ok_or_else(|| {
                tracing::debug!("Bearer token did not resolve to a live session");
                ApiError::unauthorized("Invalid session")
            })?;

            Ok(AuthUser(session))
        })
    }
}

/// Middleware function to inject the session store into request extensions.
pub async fn session_auth(
    store: Arc<SessionStore>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    request.extensions_mut().insert(store);
    next.run(request).await
}
