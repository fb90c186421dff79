//! Users API handlers.
//!
//! ```text
//! POST /api/users/signup {"name":"Ada","mobileNumber":"9876543210","username":"ada","password":"secret1"}
//! POST /api/users/login  {"username":"ada","password":"secret1"}
//! GET  /api/users
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{AccountError, User};

use super::envelope::ApiResponse;
use super::error::{ApiError, ApiResult};
use super::state::HttpState;
use super::validation::{FieldErrors, require_min_len, require_mobile_number};

/// Signup request body.
///
/// Fields default to empty strings so an absent field reports the same
/// "is required" violation as a blank one.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    /// Display name, at least 2 characters.
    #[serde(default)]
    pub name: String,
    /// Ten-digit mobile number starting with 6-9.
    #[serde(default)]
    pub mobile_number: String,
    /// Desired username, at least 3 characters.
    #[serde(default)]
    pub username: String,
    /// Password, at least 6 characters.
    #[serde(default)]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct LoginRequest {
    /// Username to authenticate.
    #[serde(default)]
    pub username: String,
    /// Password to check against the stored record.
    #[serde(default)]
    pub password: String,
}

fn validate_signup(request: &SignupRequest) -> Result<(), ApiError> {
    let mut errors = FieldErrors::default();
    require_min_len(&mut errors, "name", "Name", &request.name, 2);
    require_mobile_number(&mut errors, "mobileNumber", &request.mobile_number);
    require_min_len(&mut errors, "username", "Username", &request.username, 3);
    require_min_len(&mut errors, "password", "Password", &request.password, 6);
    errors.into_result()
}

fn validate_login(request: &LoginRequest) -> Result<(), ApiError> {
    let mut errors = FieldErrors::default();
    require_min_len(&mut errors, "username", "Username", &request.username, 3);
    require_min_len(&mut errors, "password", "Password", &request.password, 6);
    errors.into_result()
}

/// Create a new account.
#[utoipa::path(
    post,
    path = "/api/users/signup",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "Account created; envelope data is the stored record"),
        (status = 400, description = "Validation failure or duplicate username/mobile number"),
        (status = 500, description = "Record store failure")
    ),
    tags = ["users"],
    operation_id = "signup"
)]
#[post("/signup")]
pub async fn signup(
    state: web::Data<HttpState>,
    payload: web::Json<SignupRequest>,
) -> ApiResult<HttpResponse> {
    let request = payload.into_inner();
    validate_signup(&request)?;
    let candidate = User::new(
        request.name,
        request.mobile_number,
        request.username,
        request.password,
    );
    let created = state
        .accounts
        .create_account(candidate)
        .await
        .map_err(map_create_error)?;
    // The response carries the stored record verbatim, password and all.
    // A long-standing contract gap inherited from the first version of
    // this API; clients depend on the shape, so it stays.
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Account created successfully!",
        created,
    )))
}

fn map_create_error(err: AccountError) -> ApiError {
    match err {
        AccountError::Storage(cause) => {
            tracing::error!(error = %cause, "signup failed against the record store");
            ApiError::Internal(format!("Failed to create account: {cause}"))
        }
        duplicate => ApiError::Duplicate(duplicate.to_string()),
    }
}

/// Authenticate a username/password pair.
#[utoipa::path(
    post,
    path = "/api/users/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success; envelope data is the user with a blanked password"),
        (status = 400, description = "Validation failure"),
        (status = 401, description = "Invalid username or password"),
        (status = 500, description = "Record store failure")
    ),
    tags = ["users"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let request = payload.into_inner();
    validate_login(&request)?;
    let user = state
        .accounts
        .verify_credentials(&request.username, &request.password)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Login successful!", user.redacted())))
}

/// List every account, passwords blanked.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All users in storage order, passwords blanked"),
        (status = 500, description = "Record store failure")
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let users: Vec<User> = state
        .accounts
        .list_all()
        .await?
        .iter()
        .map(User::redacted)
        .collect();
    Ok(HttpResponse::Ok().json(ApiResponse::success("Users retrieved successfully", users)))
}
