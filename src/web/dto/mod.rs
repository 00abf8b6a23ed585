//! Request/response DTOs and validation for the Web API.

mod request;
mod response;
mod validation;

pub use request::{
    CreateIcebergTableRequest, CreateSparkJobRequest, CreateUserRequest, LoginRequest,
    UpdateIcebergTableRequest, UpdateSparkJobRequest,
};
pub use response::{
    ApiResponse, CreatedUserResponse, LoginResponse, MeResponse, MessageResponse, UserInfo,
};
pub use validation::{ValidatedJson, CHAT_ID_DIGITS, CORPORATE_EMAIL_DOMAIN};
