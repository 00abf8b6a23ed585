//! Web API module for LakeAdmin.
//!
//! This module provides the JSON REST API used by the browser console:
//! authentication, admin user creation, and CRUD over Spark job
//! configurations and Iceberg table registrations.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::create_router;
pub use server::WebServer;
