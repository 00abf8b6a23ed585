//! Web server for LakeAdmin.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use crate::auth::SessionStore;
use crate::config::{AuthConfig, ServerConfig};
use crate::Database;

use super::handlers::AppState;
use super::router::{create_health_router, create_router};

/// Web server for the API.
pub struct WebServer {
    /// Server address.
    addr: SocketAddr,
    /// Application state.
    app_state: Arc<AppState>,
    /// CORS allowed origins.
    cors_origins: Vec<String>,
}

impl WebServer {
    /// Create a new web server.
    pub fn new(server_config: &ServerConfig, auth_config: &AuthConfig, db: Database) -> Self {
        let addr = format!("{}:{}", server_config.host, server_config.port)
            .parse()
            .expect("Invalid web server address");

        let app_state = AppState::new(
            Arc::new(db),
            auth_config.session_ttl_secs,
            auth_config.admin_token.clone(),
        );

        Self {
            addr,
            app_state: Arc::new(app_state),
            cors_origins: server_config.cors_origins.clone(),
        }
    }

    /// Get the server address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Start the session cleanup background task.
    ///
    /// Runs every hour and removes expired sessions from the store.
    fn start_session_cleanup_task(sessions: Arc<SessionStore>) {
        tokio::spawn(async move {
            const CLEANUP_INTERVAL_SECS: u64 = 3600;

            let mut interval = tokio::time::interval(Duration::from_secs(CLEANUP_INTERVAL_SECS));

            // Skip the first immediate tick
            interval.tick().await;

            loop {
                interval.tick().await;

                let removed = sessions.cleanup();
                if removed > 0 {
                    tracing::info!(removed, "Cleaned up expired sessions");
                } else {
                    tracing::debug!("No expired sessions to clean up");
                }
            }
        });
    }

    /// Run the web server.
    pub async fn run(self) -> Result<(), std::io::Error> {
        let sessions = self.app_state.sessions.clone();

        let router =
            create_router(self.app_state, &self.cors_origins).merge(create_health_router());

        let listener = TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;

        Self::start_session_cleanup_task(sessions);
        tracing::info!("Session cleanup task started (runs every hour)");

        tracing::info!("Web server listening on http://{}", local_addr);

        axum::serve(listener, router).await
    }

    /// Run the server in the background and return the actual bound address.
    ///
    /// This is useful for testing when binding to port 0.
    pub async fn run_with_addr(self) -> Result<SocketAddr, std::io::Error> {
        let sessions = self.app_state.sessions.clone();

        let router =
            create_router(self.app_state, &self.cors_origins).merge(create_health_router());

        let listener = TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;

        Self::start_session_cleanup_task(sessions);
        tracing::info!("Session cleanup task started (runs every hour)");

        tracing::info!("Web server listening on http://{}", local_addr);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                tracing::error!("Web server error: {}", e);
            }
        });

        Ok(local_addr)
    }
}
