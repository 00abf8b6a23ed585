//! Spark job configuration model for LakeAdmin.

use serde::Serialize;

/// A Spark job configuration record.
///
/// `application_name` is the natural key: it must be unique across all
/// owners. Serialized field names are camelCase to match the console API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SparkJob {
    /// Unique record ID.
    pub id: i64,
    /// Owning user ID.
    pub user_id: i64,
    /// Contact email of the job owner.
    pub user_email: String,
    /// Spark application name (unique).
    pub application_name: String,
    /// Notification chat identifier (8 decimal digits).
    pub chat_id: String,
    /// Memory allocation in GB.
    pub job_ram: i64,
    /// Number of cores.
    pub job_core: i64,
    /// Number of executors.
    pub job_executor: i64,
    /// Whether the job is active.
    pub is_active: bool,
}

/// Data for creating a new Spark job configuration.
#[derive(Debug, Clone)]
pub struct NewSparkJob {
    /// Owning user ID.
    pub user_id: i64,
    /// Contact email of the job owner.
    pub user_email: String,
    /// Spark application name (unique).
    pub application_name: String,
    /// Notification chat identifier (8 decimal digits).
    pub chat_id: String,
    /// Memory allocation in GB.
    pub job_ram: i64,
    /// Number of cores.
    pub job_core: i64,
    /// Number of executors.
    pub job_executor: i64,
    /// Whether the job starts active. Defaults to false.
    pub is_active: bool,
}

/// Data for partially updating a Spark job configuration.
///
/// Only fields that are set will be modified.
#[derive(Debug, Clone, Default)]
pub struct SparkJobUpdate {
    /// New contact email.
    pub user_email: Option<String>,
    /// New application name.
    pub application_name: Option<String>,
    /// New chat identifier.
    pub chat_id: Option<String>,
    /// New memory allocation.
    pub job_ram: Option<i64>,
    /// New core count.
    pub job_core: Option<i64>,
    /// New executor count.
    pub job_executor: Option<i64>,
    /// New active flag.
    pub is_active: Option<bool>,
}

impl SparkJobUpdate {
    /// Create an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a new contact email.
    pub fn user_email(mut self, email: impl Into<String>) -> Self {
        self.user_email = Some(email.into());
        self
    }

    /// Set a new application name.
    pub fn application_name(mut self, name: impl Into<String>) -> Self {
        self.application_name = Some(name.into());
        self
    }

    /// Set a new chat identifier.
    pub fn chat_id(mut self, chat_id: impl Into<String>) -> Self {
        self.chat_id = Some(chat_id.into());
        self
    }

    /// Set a new memory allocation.
    pub fn job_ram(mut self, ram: i64) -> Self {
        self.job_ram = Some(ram);
        self
    }

    /// Set a new core count.
    pub fn job_core(mut self, cores: i64) -> Self {
        self.job_core = Some(cores);
        self
    }

    /// Set a new executor count.
    pub fn job_executor(mut self, executors: i64) -> Self {
        self.job_executor = Some(executors);
        self
    }

    /// Set the active flag.
    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    /// Check if any fields are set.
    pub fn is_empty(&self) -> bool {
        self.user_email.is_none()
            && self.application_name.is_none()
            && self.chat_id.is_none()
            && self.job_ram.is_none()
            && self.job_core.is_none()
            && self.job_executor.is_none()
            && self.is_active.is_none()
    }
}
