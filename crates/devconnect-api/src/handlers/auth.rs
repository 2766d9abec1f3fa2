//! Login and authenticated user lookup

use super::users::TokenResponse;
use crate::auth::{jwt, password::verify_password, AuthUser};
use crate::error::ApiError;
use crate::state::AppState;
use axum::{extract::State, Extension, Json};
use devconnect_core::models::User;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

/// Login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(email(message = "Please include a valid email"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login with email and password
///
/// Unknown email and wrong password produce the same generic rejection so
/// the response never reveals whether the email existed.
#[utoipa::path(
    post,
    path = "/api/auth",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 400, description = "Invalid credentials", body = crate::error::ErrorsBody),
        (status = 500, description = "Server error"),
    )
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    request.validate()?;

    let user = state
        .store
        .find_user_by_email(&request.email)
        .await?
        .ok_or_else(|| ApiError::validation_msg("Invalid credentials"))?;

    let password_valid = verify_password(&request.password, &user.password)?;
    if !password_valid {
        return Err(ApiError::validation_msg("Invalid credentials"));
    }

    let token = jwt::issue(&state.config.auth, user.id)?;
    Ok(Json(TokenResponse { token }))
}

/// Fetch the caller's own user record
///
/// The password hash is never serialized.
#[utoipa::path(
    get,
    path = "/api/auth",
    tag = "auth",
    responses(
        (status = 200, description = "Caller's user record"),
        (status = 401, description = "Missing or invalid token", body = crate::error::MsgBody),
        (status = 500, description = "Server error"),
    )
)]
pub async fn me(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Option<User>>, ApiError> {
    let record = state.store.find_user_by_id(user.id).await?;
    Ok(Json(record))
}
