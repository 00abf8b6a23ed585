//! User model for LakeAdmin.

use serde::Serialize;

/// Operator account.
///
/// Accounts are created only through the admin create-user action; the
/// password column holds an Argon2 hash and is never serialized.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID.
    pub id: i64,
    /// Login username (unique).
    pub username: String,
    /// Password hash (Argon2).
    #[serde(skip_serializing)]
    pub password: String,
    /// Account creation timestamp.
    pub created_at: String,
}

/// Data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Login username.
    pub username: String,
    /// Password hash (should be pre-hashed with Argon2).
    pub password: String,
}

impl NewUser {
    /// Create a new user record.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user() {
        let user = NewUser::new("alice", "$argon2id$hash");
        assert_eq!(user.username, "alice");
        assert_eq!(user.password, "$argon2id$hash");
    }

    #[test]
    fn test_user_password_not_serialized() {
        let user = User {
            id: 1,
            username: "alice".to_string(),
            password: "$argon2id$hash".to_string(),
            created_at: "2025-01-01 00:00:00".to_string(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["username"], "alice");
        assert!(json.get("password").is_none());
    }
}
