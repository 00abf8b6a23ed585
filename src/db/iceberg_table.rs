//! Iceberg table registration model for LakeAdmin.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of job feeding an Iceberg table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum TableJobType {
    /// Continuously running streaming job.
    Streaming,
    /// Scheduled batch job.
    Batch,
    /// Incremental load job.
    Incremental,
}

impl TableJobType {
    /// Convert job type to its database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TableJobType::Streaming => "streaming",
            TableJobType::Batch => "batch",
            TableJobType::Incremental => "incremental",
        }
    }
}

impl fmt::Display for TableJobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TableJobType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "streaming" => Ok(TableJobType::Streaming),
            "batch" => Ok(TableJobType::Batch),
            "incremental" => Ok(TableJobType::Incremental),
            _ => Err(format!("unknown table job type: {s}")),
        }
    }
}

/// An Iceberg table registration record.
///
/// `table_name` is the natural key: it must be unique across all owners.
/// Serialized field names are camelCase to match the console API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct IcebergTable {
    /// Unique record ID.
    pub id: i64,
    /// Owning user ID.
    pub user_id: i64,
    /// Registered table name (unique).
    pub table_name: String,
    /// Kind of job feeding the table.
    pub table_job_type: TableJobType,
    /// Storage location URI.
    pub table_location: String,
    /// Whether the registration is active.
    pub is_active: bool,
}

/// Data for creating a new Iceberg table registration.
#[derive(Debug, Clone)]
pub struct NewIcebergTable {
    /// Owning user ID.
    pub user_id: i64,
    /// Registered table name (unique).
    pub table_name: String,
    /// Kind of job feeding the table.
    pub table_job_type: TableJobType,
    /// Storage location URI.
    pub table_location: String,
    /// Whether the registration starts active. Defaults to false.
    pub is_active: bool,
}

/// Data for partially updating an Iceberg table registration.
///
/// Only fields that are set will be modified.
#[derive(Debug, Clone, Default)]
pub struct IcebergTableUpdate {
    /// New table name.
    pub table_name: Option<String>,
    /// New job type.
    pub table_job_type: Option<TableJobType>,
    /// New storage location.
    pub table_location: Option<String>,
    /// New active flag.
    pub is_active: Option<bool>,
}

impl IcebergTableUpdate {
    /// Create an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a new table name.
    pub fn table_name(mut self, name: impl Into<String>) -> Self {
        self.table_name = Some(name.into());
        self
    }

    /// Set a new job type.
    pub fn table_job_type(mut self, job_type: TableJobType) -> Self {
        self.table_job_type = Some(job_type);
        self
    }

    /// Set a new storage location.
    pub fn table_location(mut self, location: impl Into<String>) -> Self {
        self.table_location = Some(location.into());
        self
    }

    /// Set the active flag.
    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    /// Check if any fields are set.
    pub fn is_empty(&self) -> bool {
        self.table_name.is_none()
            && self.table_job_type.is_none()
            && self.table_location.is_none()
            && self.is_active.is_none()
    }
}
