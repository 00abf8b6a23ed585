//! API handlers for the Web API.

pub mod admin;
pub mod auth;
pub mod iceberg_table;
pub mod spark_job;

pub use admin::*;
pub use auth::*;
pub use iceberg_table::*;
pub use spark_job::*;
