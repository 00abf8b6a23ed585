//! Response DTOs for the Web API.

use serde::Serialize;

/// Generic API response wrapper.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a new API response.
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// User information in responses.
#[derive(Debug, Serialize)]
pub struct UserInfo {
    /// User ID.
    pub id: i64,
    /// Username.
    pub username: String,
}

/// Login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Opaque session token.
    pub token: String,
    /// User information.
    pub user: UserInfo,
}

/// Current user response (for /api/auth/me).
#[derive(Debug, Serialize)]
pub struct MeResponse {
    /// User information resolved from the session.
    pub user: UserInfo,
}

/// Simple message response.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

/// Admin create-user response.
///
/// The generated plain password is returned exactly once; only its hash is
/// stored.
#[derive(Debug, Serialize)]
pub struct CreatedUserResponse {
    /// The created user.
    pub user: UserInfo,
    /// The generated initial password.
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_response_envelope() {
        let response = ApiResponse::new(MessageResponse {
            message: "Logged out successfully".to_string(),
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["data"]["message"], "Logged out successfully");
    }

    #[test]
    fn test_login_response_shape() {
        let response = ApiResponse::new(LoginResponse {
            token: "abc123".to_string(),
            user: UserInfo {
                id: 1,
                username: "alice".to_string(),
            },
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["data"]["token"], "abc123");
        assert_eq!(json["data"]["user"]["id"], 1);
        assert_eq!(json["data"]["user"]["username"], "alice");
    }
}
