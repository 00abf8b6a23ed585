//! Iceberg table repository for LakeAdmin.

use sqlx::{QueryBuilder, SqlitePool};

use super::iceberg_table::{IcebergTable, IcebergTableUpdate, NewIcebergTable};
use crate::{LakeAdminError, Result};

const SELECT_COLUMNS: &str = "SELECT id, user_id, table_name, table_job_type, table_location, \
     is_active FROM iceberg_tables";

/// Repository for Iceberg table registration records.
pub struct IcebergTableRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> IcebergTableRepository<'a> {
    /// Create a new IcebergTableRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new Iceberg table registration.
    ///
    /// Callers are expected to have pre-checked the table name; the UNIQUE
    /// index is the authoritative duplicate check.
    pub async fn create(&self, new_table: &NewIcebergTable) -> Result<IcebergTable> {
        let result = sqlx::query(
            "INSERT INTO iceberg_tables (user_id, table_name, table_job_type, table_location, is_active) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(new_table.user_id)
        .bind(&new_table.table_name)
        .bind(new_table.table_job_type)
        .bind(&new_table.table_location)
        .bind(new_table.is_active)
        .execute(self.pool)
        .await
        .map_err(|e| LakeAdminError::Database(e.to_string()))?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| LakeAdminError::NotFound("iceberg table".to_string()))
    }

    /// Get an Iceberg table by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<IcebergTable>> {
        let result = sqlx::query_as::<_, IcebergTable>(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(self.pool)
            .await
            .map_err(|e| LakeAdminError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Get an Iceberg table by its registered name.
    pub async fn get_by_table_name(&self, name: &str) -> Result<Option<IcebergTable>> {
        let result =
            sqlx::query_as::<_, IcebergTable>(&format!("{SELECT_COLUMNS} WHERE table_name = ?"))
                .bind(name)
                .fetch_optional(self.pool)
                .await
                .map_err(|e| LakeAdminError::Database(e.to_string()))?;

        Ok(result)
    }

    /// List Iceberg tables owned by a user, newest first.
    pub async fn list_by_user(&self, user_id: i64) -> Result<Vec<IcebergTable>> {
        let tables = sqlx::query_as::<_, IcebergTable>(&format!(
            "{SELECT_COLUMNS} WHERE user_id = ? ORDER BY id DESC"
        ))
        .bind(user_id)
        .fetch_all(self.pool)
        .await
        .map_err(|e| LakeAdminError::Database(e.to_string()))?;

        Ok(tables)
    }

    /// List all Iceberg tables.
    pub async fn list_all(&self) -> Result<Vec<IcebergTable>> {
        let tables =
            sqlx::query_as::<_, IcebergTable>(&format!("{SELECT_COLUMNS} ORDER BY id DESC"))
                .fetch_all(self.pool)
                .await
                .map_err(|e| LakeAdminError::Database(e.to_string()))?;

        Ok(tables)
    }

    /// Partially update an Iceberg table owned by the given user.
    ///
    /// Only fields that are set in the update will be modified.
    /// Returns the updated record, or None if no row matched the id and owner.
    pub async fn update(
        &self,
        id: i64,
        user_id: i64,
        update: &IcebergTableUpdate,
    ) -> Result<Option<IcebergTable>> {
        if update.is_empty() {
            return self.get_owned(id, user_id).await;
        }

        let mut query: QueryBuilder<sqlx::Sqlite> = QueryBuilder::new("UPDATE iceberg_tables SET ");
        let mut separated = query.separated(", ");

        if let Some(ref table_name) = update.table_name {
            separated.push("table_name = ");
            separated.push_bind_unseparated(table_name);
        }
        if let Some(table_job_type) = update.table_job_type {
            separated.push("table_job_type = ");
            separated.push_bind_unseparated(table_job_type);
        }
        if let Some(ref table_location) = update.table_location {
            separated.push("table_location = ");
            separated.push_bind_unseparated(table_location);
        }
        if let Some(is_active) = update.is_active {
            separated.push("is_active = ");
            separated.push_bind_unseparated(is_active);
        }

        query.push(" WHERE id = ");
        query.push_bind(id);
        query.push(" AND user_id = ");
        query.push_bind(user_id);

        let result = query
            .build()
            .execute(self.pool)
            .await
            .map_err(|e| LakeAdminError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_by_id(id).await
    }

    /// Delete an Iceberg table owned by the given user.
    ///
    /// Returns true if a row was deleted, false if not found.
    pub async fn delete(&self, id: i64, user_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM iceberg_tables WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(self.pool)
            .await
            .map_err(|e| LakeAdminError::Database(e.to_string()))?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all Iceberg tables.
    pub async fn count(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM iceberg_tables")
            .fetch_one(self.pool)
            .await
            .map_err(|e| LakeAdminError::Database(e.to_string()))?;
        Ok(count.0)
    }

    async fn get_owned(&self, id: i64, user_id: i64) -> Result<Option<IcebergTable>> {
        let result = sqlx::query_as::<_, IcebergTable>(&format!(
            "{SELECT_COLUMNS} WHERE id = ? AND user_id = ?"
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| LakeAdminError::Database(e.to_string()))?;

        Ok(result)
    }
}
