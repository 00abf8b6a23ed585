//! Spark job repository for LakeAdmin.

use sqlx::{QueryBuilder, SqlitePool};

use super::spark_job::{NewSparkJob, SparkJob, SparkJobUpdate};
use crate::{LakeAdminError, Result};

const SELECT_COLUMNS: &str = "SELECT id, user_id, user_email, application_name, chat_id, \
     job_ram, job_core, job_executor, is_active FROM spark_jobs";

/// Repository for Spark job configuration records.
pub struct SparkJobRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> SparkJobRepository<'a> {
    /// Create a new SparkJobRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new Spark job configuration.
    ///
    /// Callers are expected to have pre-checked the application name; the
    /// UNIQUE index is the authoritative duplicate check.
    pub async fn create(&self, new_job: &NewSparkJob) -> Result<SparkJob> {
        let result = sqlx::query(
            "INSERT INTO spark_jobs (user_id, user_email, application_name, chat_id, \
             job_ram, job_core, job_executor, is_active) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(new_job.user_id)
        .bind(&new_job.user_email)
        .bind(&new_job.application_name)
        .bind(&new_job.chat_id)
        .bind(new_job.job_ram)
        .bind(new_job.job_core)
        .bind(new_job.job_executor)
        .bind(new_job.is_active)
        .execute(self.pool)
        .await
        .map_err(|e| LakeAdminError::Database(e.to_string()))?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| LakeAdminError::NotFound("spark job".to_string()))
    }

    /// Get a Spark job by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<SparkJob>> {
        let result = sqlx::query_as::<_, SparkJob>(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(self.pool)
            .await
            .map_err(|e| LakeAdminError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Get a Spark job by its application name.
    pub async fn get_by_application_name(&self, name: &str) -> Result<Option<SparkJob>> {
        let result = sqlx::query_as::<_, SparkJob>(&format!(
            "{SELECT_COLUMNS} WHERE application_name = ?"
        ))
        .bind(name)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| LakeAdminError::Database(e.to_string()))?;

        Ok(result)
    }

    /// List Spark jobs owned by a user, newest first.
    pub async fn list_by_user(&self, user_id: i64) -> Result<Vec<SparkJob>> {
        let jobs = sqlx::query_as::<_, SparkJob>(&format!(
            "{SELECT_COLUMNS} WHERE user_id = ? ORDER BY id DESC"
        ))
        .bind(user_id)
        .fetch_all(self.pool)
        .await
        .map_err(|e| LakeAdminError::Database(e.to_string()))?;

        Ok(jobs)
    }

    /// List all Spark jobs.
    pub async fn list_all(&self) -> Result<Vec<SparkJob>> {
        let jobs = sqlx::query_as::<_, SparkJob>(&format!("{SELECT_COLUMNS} ORDER BY id DESC"))
            .fetch_all(self.pool)
            .await
            .map_err(|e| LakeAdminError::Database(e.to_string()))?;

        Ok(jobs)
    }

    /// Partially update a Spark job owned by the given user.
    ///
    /// Only fields that are set in the update will be modified.
    /// Returns the updated record, or None if no row matched the id and owner.
    pub async fn update(
        &self,
        id: i64,
        user_id: i64,
        update: &SparkJobUpdate,
    ) -> Result<Option<SparkJob>> {
        if update.is_empty() {
            return self.get_owned(id, user_id).await;
        }

        let mut query: QueryBuilder<sqlx::Sqlite> = QueryBuilder::new("UPDATE spark_jobs SET ");
        let mut separated = query.separated(", ");

        if let Some(ref user_email) = update.user_email {
            separated.push("user_email = ");
            separated.push_bind_unseparated(user_email);
        }
        if let Some(ref application_name) = update.application_name {
            separated.push("application_name = ");
            separated.push_bind_unseparated(application_name);
        }
        if let Some(ref chat_id) = update.chat_id {
            separated.push("chat_id = ");
            separated.push_bind_unseparated(chat_id);
        }
        if let Some(job_ram) = update.job_ram {
            separated.push("job_ram = ");
            separated.push_bind_unseparated(job_ram);
        }
        if let Some(job_core) = update.job_core {
            separated.push("job_core = ");
            separated.push_bind_unseparated(job_core);
        }
        if let Some(job_executor) = update.job_executor {
            separated.push("job_executor = ");
            separated.push_bind_unseparated(job_executor);
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

    /// Delete a Spark job owned by the given user.
    ///
    /// Returns true if a row was deleted, false if not found.
    pub async fn delete(&self, id: i64, user_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM spark_jobs WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(self.pool)
            .await
            .map_err(|e| LakeAdminError::Database(e.to_string()))?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all Spark jobs.
    pub async fn count(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM spark_jobs")
            .fetch_one(self.pool)
            .await
            .map_err(|e| LakeAdminError::Database(e.to_string()))?;
        Ok(count.0)
    }

    async fn get_owned(&self, id: i64, user_id: i64) -> Result<Option<SparkJob>> {
        let result = sqlx::query_as::<_, SparkJob>(&format!(
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
