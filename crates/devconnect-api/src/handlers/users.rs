//! User registration

use crate::auth::{jwt, password::hash_password};
use crate::error::ApiError;
use crate::state::AppState;
use axum::{extract::State, Json};
use devconnect_core::models::User;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

/// Registration request
///
/// Required fields default to empty strings so that absence surfaces as a
/// validation failure rather than a deserialization rejection.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[serde(default)]
    #[validate(email(message = "Please include a valid email"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 6, message = "Please enter a password with 6 or more characters"))]
    pub password: String,
}

/// Session token response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

/// Gravatar URL for an email address (200px, PG-rated, default image)
pub fn gravatar_url(email: &str) -> String {
    let digest = Sha256::digest(email.trim().to_lowercase().as_bytes());
    format!(
        "https://www.gravatar.com/avatar/{}?s=200&r=pg&d=mm",
        hex::encode(digest)
    )
}

/// Register a new user
///
/// Checks email uniqueness, hashes the password, derives the avatar from
/// the email, and answers with a session token.
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User registered", body = TokenResponse),
        (status = 400, description = "Validation failure or duplicate email", body = crate::error::ErrorsBody),
        (status = 500, description = "Server error"),
    )
)]
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    request.validate()?;

    if state
        .store
        .find_user_by_email(&request.email)
        .await?
        .is_some()
    {
        return Err(ApiError::validation_msg("User already exists"));
    }

    let avatar = gravatar_url(&request.email);
    let password = hash_password(&request.password)?;

    let user = state
        .store
        .insert_user(User::new(request.name, request.email, password, avatar))
        .await?;

    let token = jwt::issue(&state.config.auth, user.id)?;
    Ok(Json(TokenResponse { token }))
}
