//! Authentication guard for protected routes
//!
//! Two transitions per request: extract the `x-auth-token` header, then
//! verify it via the token service. On success the resolved identity is
//! added to request extensions for downstream handlers; the guard itself
//! never touches the store.

use super::jwt::{self, TokenError};
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// Header carrying the session token
pub const TOKEN_HEADER: &str = "x-auth-token";

/// Authenticated identity extracted from a verified token
///
/// Handlers receive this via `Extension<AuthUser>`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AuthUser {
    /// Verified user identifier
    pub id: Uuid,
}

/// Guard rejections
///
/// The missing-token and invalid-token cases are distinguished in the
/// user-facing message only; both are 401.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("No token presented")]
    MissingToken,

    #[error("Invalid token: {0}")]
    InvalidToken(#[from] TokenError),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let msg = match self {
            AuthError::MissingToken => "No token, authorization denied",
            AuthError::InvalidToken(_) => "Token is not valid",
        };

        let body = serde_json::json!({ "msg": msg });
        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}

/// Require a valid session token
///
/// Mounted with `middleware::from_fn_with_state` on every route that needs
/// ownership checks or personalized reads.
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = request
        .headers()
        .get(TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    let claims = jwt::verify(&state.config.auth, token).map_err(|e| {
        tracing::debug!("token verification failed: {}", e);
        AuthError::InvalidToken(e)
    })?;

    let id = Uuid::parse_str(&claims.user.id)
        .map_err(|_| AuthError::InvalidToken(TokenError::Malformed))?;

    request.extensions_mut().insert(AuthUser { id });

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_body() {
        let response = AuthError::MissingToken.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_invalid_token_body() {
        let response = AuthError::InvalidToken(TokenError::Malformed).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
