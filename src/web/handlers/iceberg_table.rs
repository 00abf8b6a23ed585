//! Iceberg table registration handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::db::{IcebergTable, IcebergTableRepository, IcebergTableUpdate, NewIcebergTable};
use crate::web::dto::{
    ApiResponse, CreateIcebergTableRequest, UpdateIcebergTableRequest, ValidatedJson,
};
use crate::web::error::ApiError;
use crate::web::middleware::AuthUser;

use super::auth::AppState;

fn db_error(context: &str) -> impl Fn(crate::LakeAdminError) -> ApiError + '_ {
    move |e| {
        tracing::error!("{context}: {e}");
        ApiError::internal(format!("Failed to {context}"))
    }
}

/// GET /api/iceberg-tables - List the caller's Iceberg table registrations.
pub async fn list_iceberg_tables(
    State(state): State<Arc<AppState>>,
    AuthUser(session): AuthUser,
) -> Result<Json<ApiResponse<Vec<IcebergTable>>>, ApiError> {
    let repo = IcebergTableRepository::new(state.db.pool());
    let tables = repo
        .list_by_user(session.user_id)
        .await
        .map_err(db_error("fetch iceberg tables"))?;

    Ok(Json(ApiResponse::new(tables)))
}

/// POST /api/iceberg-tables - Create an Iceberg table registration.
pub async fn create_iceberg_table(
    State(state): State<Arc<AppState>>,
    AuthUser(session): AuthUser,
    ValidatedJson(req): ValidatedJson<CreateIcebergTableRequest>,
) -> Result<(StatusCode, Json<ApiResponse<IcebergTable>>), ApiError> {
    let repo = IcebergTableRepository::new(state.db.pool());

    // Fast-path duplicate check; the UNIQUE index below is authoritative
    let existing = repo
        .get_by_table_name(&req.table_name)
        .await
        .map_err(db_error("create iceberg table"))?;
    if existing.is_some() {
        return Err(ApiError::conflict("Table name already exists"));
    }

    let new_table = NewIcebergTable {
        user_id: session.user_id,
        table_name: req.table_name,
        table_job_type: req.table_job_type,
        table_location: req.table_location,
        is_active: req.is_active,
    };

    let table = repo.create(&new_table).await.map_err(|e| {
        if e.to_string().contains("UNIQUE") {
            ApiError::conflict("Table name already exists")
        } else {
            tracing::error!("Iceberg table creation failed: {}", e);
            ApiError::internal("Failed to create iceberg table")
        }
    })?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(table))))
}

/// PUT /api/iceberg-tables/:id - Partially update an Iceberg table registration.
pub async fn update_iceberg_table(
    State(state): State<Arc<AppState>>,
    AuthUser(session): AuthUser,
    Path(id): Path<i64>,
    ValidatedJson(req): ValidatedJson<UpdateIcebergTableRequest>,
) -> Result<Json<ApiResponse<IcebergTable>>, ApiError> {
    let repo = IcebergTableRepository::new(state.db.pool());

    // If the table name changes, re-check uniqueness against all other
    // records; keeping one's own name is allowed.
    if let Some(ref name) = req.table_name {
        let existing = repo
            .get_by_table_name(name)
            .await
            .map_err(db_error("update iceberg table"))?;
        if existing.map(|table| table.id != id).unwrap_or(false) {
            return Err(ApiError::conflict("Table name already exists"));
        }
    }

    let update = IcebergTableUpdate {
        table_name: req.table_name,
        table_job_type: req.table_job_type,
        table_location: req.table_location,
        is_active: req.is_active,
    };

    let table = repo
        .update(id, session.user_id, &update)
        .await
        .map_err(db_error("update iceberg table"))?
        .ok_or_else(|| ApiError::not_found("Iceberg table not found"))?;

    Ok(Json(ApiResponse::new(table)))
}

/// DELETE /api/iceberg-tables/:id - Delete an Iceberg table registration.
///
/// Idempotent: deleting an absent id also answers 204.
pub async fn delete_iceberg_table(
    State(state): State<Arc<AppState>>,
    AuthUser(session): AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = IcebergTableRepository::new(state.db.pool());
    repo.delete(id, session.user_id)
        .await
        .map_err(db_error("delete iceberg table"))?;

    Ok(StatusCode::NO_CONTENT)
}
