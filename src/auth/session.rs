//! Login session management for LakeAdmin.
//!
//! Sessions live in process memory only: they are created on login, removed
//! on logout, and expire after a configurable TTL. A process restart clears
//! all sessions.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::RngCore;
use tracing::{debug, info};

/// Default session lifetime (24 hours).
pub const DEFAULT_SESSION_TTL_SECS: u64 = 24 * 60 * 60;

/// A logged-in operator session.
#[derive(Debug, Clone)]
pub struct Session {
    /// Opaque session token.
    pub token: String,
    /// User ID associated with this session.
    pub user_id: i64,
    /// Username associated with this session.
    pub username: String,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
    /// When the session expires.
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Check if the session has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

/// Generate an opaque session token: 32 random bytes, hex encoded.
fn generate_token() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Store of active sessions, keyed by token.
///
/// The map is guarded by an `RwLock` so the store can be shared across
/// request handlers. Constructed once at startup and injected through the
/// application state.
#[derive(Debug)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Session>>,
    ttl: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Create a session store with the default TTL.
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(DEFAULT_SESSION_TTL_SECS))
    }

    /// Create a session store with a custom session TTL.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Create a new session for a user and return it.
    pub fn create(&self, user_id: i64, username: &str) -> Session {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::from_std(self.ttl).unwrap_or_default();
        let session = Session {
            token: generate_token(),
            user_id,
            username: username.to_string(),
            created_at: now,
            expires_at,
        };

        let mut sessions = self.sessions.write().expect("session lock poisoned");
        sessions.insert(session.token.clone(), session.clone());

        info!(user_id, username = %username, "Session created");
        session
    }

    /// Look up a session by token.
    ///
    /// Expired sessions are removed on observation and reported as absent.
    pub fn get(&self, token: &str) -> Option<Session> {
        {
            let sessions = self.sessions.read().expect("session lock poisoned");
            match sessions.get(token) {
                Some(s) if !s.is_expired() => return Some(s.clone()),
                Some(_) => {}
                None => return None,
            }
        }

        // Found but expired: drop it
        let mut sessions = self.sessions.write().expect("session lock poisoned");
        if sessions.get(token).map(|s| s.is_expired()).unwrap_or(false) {
            sessions.remove(token);
            debug!("Removed expired session on lookup");
        }
        None
    }

    /// Delete a session by token. Deleting an absent token is a no-op.
    pub fn delete(&self, token: &str) {
        let mut sessions = self.sessions.write().expect("session lock poisoned");
        if let Some(session) = sessions.remove(token) {
            info!(user_id = session.user_id, "Session deleted");
        } else {
            debug!("Delete: session not found");
        }
    }

    /// Remove all expired sessions. Returns the number removed.
    pub fn cleanup(&self) -> usize {
        let mut sessions = self.sessions.write().expect("session lock poisoned");
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired());
        let removed = before - sessions.len();
        if removed > 0 {
            debug!(removed, "Cleaned up expired sessions");
        }
        removed
    }

    /// Number of stored sessions (including not-yet-swept expired ones).
    pub fn len(&self) -> usize {
        self.sessions.read().expect("session lock poisoned").len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_session() {
        let store = SessionStore::new();
        let session = store.create(1, "alice");

        assert_eq!(session.user_id, 1);
        assert_eq!(session.username, "alice");
        assert!(!session.token.is_empty());
        assert!(!session.is_expired());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_token_uniqueness() {
        let store = SessionStore::new();
        let s1 = store.create(1, "alice");
        let s2 = store.create(1, "alice");

        assert_ne!(s1.token, s2.token);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_token_format() {
        let store = SessionStore::new();
        let session = store.create(1, "alice");

        // 32 bytes hex encoded
        assert_eq!(session.token.len(), 64);
        assert!(session.token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_get_session() {
        let store = SessionStore::new();
        let session = store.create(7, "bob");

        let found = store.get(&session.token).unwrap();
        assert_eq!(found.user_id, 7);
        assert_eq!(found.username, "bob");

        assert!(store.get("unknown-token").is_none());
    }

    #[test]
    fn test_delete_idempotent() {
        let store = SessionStore::new();
        let session = store.create(1, "alice");

        store.delete(&session.token);
        assert!(store.get(&session.token).is_none());

        // Deleting again is a no-op
        store.delete(&session.token);
        assert!(store.is_empty());
    }

    #[test]
    fn test_expired_session_reported_absent() {
        let store = SessionStore::with_ttl(Duration::from_secs(0));
        let session = store.create(1, "alice");

        assert!(store.get(&session.token).is_none());
        // Lookup of an expired session also removes it
        assert!(store.is_empty());
    }

    #[test]
    fn test_cleanup() {
        let store = SessionStore::with_ttl(Duration::from_secs(0));
        store.create(1, "alice");
        store.create(2, "bob");
        assert_eq!(store.len(), 2);

        let removed = store.cleanup();
        assert_eq!(removed, 2);
        assert!(store.is_empty());
    }

    #[test]
    fn test_cleanup_keeps_live_sessions() {
        let store = SessionStore::new();
        store.create(1, "alice");

        assert_eq!(store.cleanup(), 0);
        assert_eq!(store.len(), 1);
    }
}
