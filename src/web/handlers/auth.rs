//! Authentication handlers.

use axum::{extract::State, Json};
use std::sync::Arc;
use std::time::Duration;

use crate::auth::SessionStore;
use crate::db::UserRepository;
use crate::web::dto::{
    ApiResponse, LoginRequest, LoginResponse, MeResponse, MessageResponse, UserInfo, ValidatedJson,
};
use crate::web::error::ApiError;
use crate::web::middleware::AuthUser;
use crate::Database;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database handle.
    pub db: Arc<Database>,
    /// Active login sessions.
    pub sessions: Arc<SessionStore>,
    /// Token required by the admin create-user endpoint, if configured.
    pub admin_token: Option<String>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(db: Arc<Database>, session_ttl_secs: u64, admin_token: Option<String>) -> Self {
        Self {
            db,
            sessions: Arc::new(SessionStore::with_ttl(Duration::from_secs(
                session_ttl_secs,
            ))),
            admin_token,
        }
    }
}

/// POST /api/auth/login - Operator login.
pub async fn login(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    let repo = UserRepository::new(state.db.pool());
    let user = repo.get_by_username(&req.username).await.map_err(|e| {
        tracing::error!("Login lookup failed: {}", e);
        ApiError::internal("Login failed")
    })?;

    // Uniform error for unknown user and wrong password: no username probing
    let user = user.ok_or_else(|| ApiError::unauthorized("Invalid username or password"))?;

    crate::auth::verify_password(&req.password, &user.password)
        .map_err(|_| ApiError::unauthorized("Invalid username or password"))?;

    let session = state.sessions.create(user.id, &user.username);

    Ok(Json(ApiResponse::new(LoginResponse {
        token: session.token,
        user: UserInfo {
            id: user.id,
            username: user.username,
        },
    })))
}

/// POST /api/auth/logout - Operator logout.
///
/// Tolerant of a session that has already disappeared.
pub async fn logout(
    State(state): State<Arc<AppState>>,
    AuthUser(session): AuthUser,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.sessions.delete(&session.token);

    Ok(Json(ApiResponse::new(MessageResponse {
        message: "Logged out successfully".to_string(),
    })))
}

/// GET /api/auth/me - Current operator identity.
pub async fn me(AuthUser(session): AuthUser) -> Json<ApiResponse<MeResponse>> {
    Json(ApiResponse::new(MeResponse {
        user: UserInfo {
            id: session.user_id,
            username: session.username,
        },
    }))
}
