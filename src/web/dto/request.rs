//! Request DTOs for the Web API.
//!
//! Record payloads use camelCase field names to match the console client.

use serde::Deserialize;
use validator::Validate;

use crate::db::TableJobType;

use super::validation::{chat_id_digits, corporate_email};

/// Login request.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Admin create-user request.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Username for the new operator account.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
}

/// Create request for a Spark job configuration.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSparkJobRequest {
    /// Contact email; must belong to the corporate domain.
    #[validate(
        email(message = "Invalid email address"),
        custom(function = corporate_email)
    )]
    pub user_email: String,
    /// Spark application name (natural key).
    #[validate(length(min = 1, message = "Application name is required"))]
    pub application_name: String,
    /// Notification chat identifier.
    #[validate(custom(function = chat_id_digits))]
    pub chat_id: String,
    /// Memory allocation in GB.
    #[validate(range(min = 1, message = "Memory must be a positive integer"))]
    pub job_ram: i64,
    /// Number of cores.
    #[validate(range(min = 1, message = "Core count must be a positive integer"))]
    pub job_core: i64,
    /// Number of executors.
    #[validate(range(min = 1, message = "Executor count must be a positive integer"))]
    pub job_executor: i64,
    /// Whether the job starts active.
    #[serde(default)]
    pub is_active: bool,
}

/// Partial update request for a Spark job configuration.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSparkJobRequest {
    /// New contact email.
    #[validate(
        email(message = "Invalid email address"),
        custom(function = corporate_email)
    )]
    pub user_email: Option<String>,
    /// New application name; uniqueness is re-checked against other records.
    #[validate(length(min = 1, message = "Application name is required"))]
    pub application_name: Option<String>,
    /// New chat identifier.
    #[validate(custom(function = chat_id_digits))]
    pub chat_id: Option<String>,
    /// New memory allocation.
    #[validate(range(min = 1, message = "Memory must be a positive integer"))]
    pub job_ram: Option<i64>,
    /// New core count.
    #[validate(range(min = 1, message = "Core count must be a positive integer"))]
    pub job_core: Option<i64>,
    /// New executor count.
    #[validate(range(min = 1, message = "Executor count must be a positive integer"))]
    pub job_executor: Option<i64>,
    /// New active flag.
    pub is_active: Option<bool>,
}

/// Create request for an Iceberg table registration.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateIcebergTableRequest {
    /// Registered table name (natural key).
    #[validate(length(min = 1, message = "Table name is required"))]
    pub table_name: String,
    /// Kind of job feeding the table.
    pub table_job_type: TableJobType,
    /// Storage location URI.
    #[validate(length(min = 1, message = "Table location is required"))]
    pub table_location: String,
    /// Whether the registration starts active.
    #[serde(default)]
    pub is_active: bool,
}

/// Partial update request for an Iceberg table registration.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIcebergTableRequest {
    /// New table name; uniqueness is re-checked against other records.
    #[validate(length(min = 1, message = "Table name is required"))]
    pub table_name: Option<String>,
    /// New job type.
    pub table_job_type: Option<TableJobType>,
    /// New storage location.
    #[validate(length(min = 1, message = "Table location is required"))]
    pub table_location: Option<String>,
    /// New active flag.
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spark_job_json() -> serde_json::Value {
        serde_json::json!({
            "userEmail": "a@vietinbank.vn",
            "applicationName": "etl-daily",
            "chatId": "12345678",
            "jobRam": 8,
            "jobCore": 4,
            "jobExecutor": 2
        })
    }

    #[test]
    fn test_create_spark_job_valid() {
        let req: CreateSparkJobRequest = serde_json::from_value(spark_job_json()).unwrap();
        assert!(req.validate().is_ok());
        // is_active defaults to false when omitted
        assert!(!req.is_active);
    }

    #[test]
    fn test_create_spark_job_bad_email_domain() {
        let mut json = spark_job_json();
        json["userEmail"] = "a@gmail.com".into();
        let req: CreateSparkJobRequest = serde_json::from_value(json).unwrap();

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("user_email"));
    }

    #[test]
    fn test_create_spark_job_bad_chat_id() {
        for bad in ["1234567", "abcd1234"] {
            let mut json = spark_job_json();
            json["chatId"] = bad.into();
            let req: CreateSparkJobRequest = serde_json::from_value(json).unwrap();

            let errors = req.validate().unwrap_err();
            assert!(errors.field_errors().contains_key("chat_id"), "{bad}");
        }
    }

    #[test]
    fn test_create_spark_job_nonpositive_resources() {
        let mut json = spark_job_json();
        json["jobRam"] = 0.into();
        let req: CreateSparkJobRequest = serde_json::from_value(json).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_update_spark_job_empty_is_valid() {
        let req: UpdateSparkJobRequest = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(req.validate().is_ok());
        assert!(req.application_name.is_none());
    }

    #[test]
    fn test_update_spark_job_validates_present_fields() {
        let req: UpdateSparkJobRequest =
            serde_json::from_value(serde_json::json!({ "chatId": "123" })).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_create_iceberg_table_job_type_enum() {
        let req: CreateIcebergTableRequest = serde_json::from_value(serde_json::json!({
            "tableName": "sales.orders",
            "tableJobType": "incremental",
            "tableLocation": "s3://lake/sales/orders"
        }))
        .unwrap();
        assert_eq!(req.table_job_type, TableJobType::Incremental);
        assert!(req.validate().is_ok());

        // Unknown variants are rejected at deserialization time
        let result = serde_json::from_value::<CreateIcebergTableRequest>(serde_json::json!({
            "tableName": "sales.orders",
            "tableJobType": "hourly",
            "tableLocation": "s3://lake/sales/orders"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_login_request_requires_fields() {
        let req = LoginRequest {
            username: "".to_string(),
            password: "secret".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
