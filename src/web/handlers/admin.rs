//! Admin handlers.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use std::sync::Arc;

use crate::auth::{generate_random_password, hash_password, GENERATED_PASSWORD_LENGTH};
use crate::db::{NewUser, UserRepository};
use crate::web::dto::{ApiResponse, CreateUserRequest, CreatedUserResponse, UserInfo, ValidatedJson};
use crate::web::error::ApiError;
use crate::web::middleware::ADMIN_TOKEN_HEADER;

use super::auth::AppState;

/// POST /api/admin/create-user - Create an operator account.
///
/// Requires the configured admin token in the X-Admin-Token header; the
/// endpoint is disabled while no token is configured. Generates a random
/// initial password, stores only its hash, and returns the plain password
/// exactly once.
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    ValidatedJson(req): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CreatedUserResponse>>), ApiError> {
    let configured = state
        .admin_token
        .as_deref()
        .ok_or_else(|| ApiError::forbidden("Admin user creation is disabled"))?;

    let presented = headers
        .get(ADMIN_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok());
    if presented != Some(configured) {
        return Err(ApiError::forbidden("Invalid admin token"));
    }

    let repo = UserRepository::new(state.db.pool());

    // Fast-path duplicate check; the UNIQUE index below is authoritative
    let exists = repo.username_exists(&req.username).await.map_err(|e| {
        tracing::error!("Username lookup failed: {}", e);
        ApiError::internal("Failed to create user")
    })?;
    if exists {
        return Err(ApiError::conflict("Username already exists"));
    }

    let password = generate_random_password(GENERATED_PASSWORD_LENGTH);
    let password_hash = hash_password(&password).map_err(|e| {
        tracing::error!("Password hashing failed: {}", e);
        ApiError::internal("Failed to create user")
    })?;

    let user = repo
        .create(&NewUser::new(&req.username, password_hash))
        .await
        .map_err(|e| {
            if e.to_string().contains("UNIQUE") {
                ApiError::conflict("Username already exists")
            } else {
                tracing::error!("User creation failed: {}", e);
                ApiError::internal("Failed to create user")
            }
        })?;

    tracing::info!(user_id = user.id, username = %user.username, "Operator account created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(CreatedUserResponse {
            user: UserInfo {
                id: user.id,
                username: user.username,
            },
            password,
        })),
    ))
}
