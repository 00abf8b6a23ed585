//! Database schema and migrations for LakeAdmin.
//!
//! This module contains all database migrations that will be applied
//! sequentially when the database is first opened or upgraded.

/// Database migrations.
///
/// Each migration is a SQL script that will be executed in order.
/// The schema_version table tracks which migrations have been applied.
pub const MIGRATIONS: &[&str] = &[
    // v1: Initial schema - users table
    r#"
-- Operator accounts. Passwords are Argon2 hashes, created by the admin
-- create-user action only.
CREATE TABLE users (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    username    TEXT NOT NULL UNIQUE,
    password    TEXT NOT NULL,
    created_at  TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX idx_users_username ON users(username);
"#,
    // v2: Spark job configurations
    r#"
-- Spark job configurations. application_name is the natural key and must be
-- unique across all owners.
CREATE TABLE spark_jobs (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id          INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    user_email       TEXT NOT NULL,
    application_name TEXT NOT NULL UNIQUE,
    chat_id          TEXT NOT NULL,
    job_ram          INTEGER NOT NULL,
    job_core         INTEGER NOT NULL,
    job_executor     INTEGER NOT NULL,
    is_active        INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX idx_spark_jobs_user_id ON spark_jobs(user_id);
"#,
    // v3: Iceberg table registrations
    r#"
-- Iceberg table registrations. table_name is the natural key and must be
-- unique across all owners.
CREATE TABLE iceberg_tables (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id         INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    table_name      TEXT NOT NULL UNIQUE,
    table_job_type  TEXT NOT NULL,
    table_location  TEXT NOT NULL,
    is_active       INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX idx_iceberg_tables_user_id ON iceberg_tables(user_id);
"#,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_not_empty() {
        assert!(!MIGRATIONS.is_empty());
        assert!(MIGRATIONS.iter().all(|m| !m.trim().is_empty()));
    }

    #[test]
    fn test_migrations_create_expected_tables() {
        let all: String = MIGRATIONS.concat();
        assert!(all.contains("CREATE TABLE users"));
        assert!(all.contains("CREATE TABLE spark_jobs"));
        assert!(all.contains("CREATE TABLE iceberg_tables"));
    }
}
