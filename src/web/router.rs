//! Router configuration for the Web API.

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{
    create_iceberg_table, create_spark_job, create_user, delete_iceberg_table, delete_spark_job,
    list_iceberg_tables, list_spark_jobs, login, logout, me, update_iceberg_table,
    update_spark_job, AppState,
};
use super::middleware::{create_cors_layer, session_auth};

/// Create the main API router.
pub fn create_router(app_state: Arc<AppState>, cors_origins: &[String]) -> Router {
    let auth_routes = Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/me", get(me));

    let admin_routes = Router::new().route("/create-user", post(create_user));

    let api_routes = Router::new()
        .nest("/auth", auth_routes)
        .nest("/admin", admin_routes)
        .route("/spark-jobs", get(list_spark_jobs).post(create_spark_job))
        .route(
            "/spark-jobs/:id",
            put(update_spark_job).delete(delete_spark_job),
        )
        .route(
            "/iceberg-tables",
            get(list_iceberg_tables).post(create_iceberg_table),
        )
        .route(
            "/iceberg-tables/:id",
            put(update_iceberg_table).delete(delete_iceberg_table),
        );

    // Clone the session store for the middleware closure
    let sessions = app_state.sessions.clone();

    Router::new()
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins))
                .layer(middleware::from_fn(move |req, next| {
                    let store = sessions.clone();
                    session_auth(store, req, next)
                })),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}
