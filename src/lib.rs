//! LakeAdmin - internal administration console for data platform resources.
//!
//! Tracks Spark job configurations and Iceberg table registrations behind a
//! username/password login, exposing a JSON REST API over a relational store.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod web;

pub use auth::{
    generate_random_password, hash_password, verify_password, PasswordError, Session,
    SessionStore,
};
pub use config::Config;
pub use db::{
    Database, IcebergTable, IcebergTableRepository, NewIcebergTable, NewSparkJob, NewUser,
    SparkJob, SparkJobRepository, TableJobType, User, UserRepository,
};
pub use error::{LakeAdminError, Result};
pub use web::WebServer;
