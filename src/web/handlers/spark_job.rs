//! Spark job configuration handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::db::{NewSparkJob, SparkJob, SparkJobRepository, SparkJobUpdate};
use crate::web::dto::{ApiResponse, CreateSparkJobRequest, UpdateSparkJobRequest, ValidatedJson};
use crate::web::error::ApiError;
use crate::web::middleware::AuthUser;

use super::auth::AppState;

fn db_error(context: &str) -> impl Fn(crate::LakeAdminError) -> ApiError + '_ {
    move |e| {
        tracing::error!("{context}: {e}");
        ApiError::internal(format!("Failed to {context}"))
    }
}

/// GET /api/spark-jobs - List the caller's Spark job configurations.
pub async fn list_spark_jobs(
    State(state): State<Arc<AppState>>,
    AuthUser(session): AuthUser,
) -> Result<Json<ApiResponse<Vec<SparkJob>>>, ApiError> {
    let repo = SparkJobRepository::new(state.db.pool());
    let jobs = repo
        .list_by_user(session.user_id)
        .await
        .map_err(db_error("fetch spark jobs"))?;

    Ok(Json(ApiResponse::new(jobs)))
}

/// POST /api/spark-jobs - Create a Spark job configuration.
pub async fn create_spark_job(
    State(state): State<Arc<AppState>>,
    AuthUser(session): AuthUser,
    ValidatedJson(req): ValidatedJson<CreateSparkJobRequest>,
) -> Result<(StatusCode, Json<ApiResponse<SparkJob>>), ApiError> {
    let repo = SparkJobRepository::new(state.db.pool());

    // Fast-path duplicate check; the UNIQUE index below is authoritative
    let existing = repo
        .get_by_application_name(&req.application_name)
        .await
        .map_err(db_error("create spark job"))?;
    if existing.is_some() {
        return Err(ApiError::conflict("Application name already exists"));
    }

    let new_job = NewSparkJob {
        user_id: session.user_id,
        user_email: req.user_email,
        application_name: req.application_name,
        chat_id: req.chat_id,
        job_ram: req.job_ram,
        job_core: req.job_core,
        job_executor: req.job_executor,
        is_active: req.is_active,
    };

    let job = repo.create(&new_job).await.map_err(|e| {
        if e.to_string().contains("UNIQUE") {
            ApiError::conflict("Application name already exists")
        } else {
            tracing::error!("Spark job creation failed: {}", e);
            ApiError::internal("Failed to create spark job")
        }
    })?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(job))))
}

/// PUT /api/spark-jobs/:id - Partially update a Spark job configuration.
pub async fn update_spark_job(
    State(state): State<Arc<AppState>>,
    AuthUser(session): AuthUser,
    Path(id): Path<i64>,
    ValidatedJson(req): ValidatedJson<UpdateSparkJobRequest>,
) -> Result<Json<ApiResponse<SparkJob>>, ApiError> {
    let repo = SparkJobRepository::new(state.db.pool());

    // If the application name changes, re-check uniqueness against all other
    // records; keeping one's own name is allowed.
    if let Some(ref name) = req.application_name {
        let existing = repo
            .get_by_application_name(name)
            .await
            .map_err(db_error("update spark job"))?;
        if existing.map(|job| job.id != id).unwrap_or(false) {
            return Err(ApiError::conflict("Application name already exists"));
        }
    }

    let update = SparkJobUpdate {
        user_email: req.user_email,
        application_name: req.application_name,
        chat_id: req.chat_id,
        job_ram: req.job_ram,
        job_core: req.job_core,
        job_executor: req.job_executor,
        is_active: req.is_active,
    };

    let job = repo
        .update(id, session.user_id, &update)
        .await
        .map_err(db_error("update spark job"))?
        .ok_or_else(|| ApiError::not_found("Spark job not found"))?;

    Ok(Json(ApiResponse::new(job)))
}

/// DELETE /api/spark-jobs/:id - Delete a Spark job configuration.
///
/// Idempotent: deleting an absent id also answers 204.
pub async fn delete_spark_job(
    State(state): State<Arc<AppState>>,
    AuthUser(session): AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = SparkJobRepository::new(state.db.pool());
    repo.delete(id, session.user_id)
        .await
        .map_err(db_error("delete spark job"))?;

    Ok(StatusCode::NO_CONTENT)
}
