//! API error handling
//!
//! One error type maps the whole taxonomy onto the legacy wire shapes:
//! validation failures as a 400 `{"errors": [...]}` array, everything else
//! as `{"msg": ...}` bodies, and unexpected failures as a plain-text 500
//! whose cause is logged server-side only. Statuses for missing resources
//! vary by route (400 for profiles, 404 for posts); callers pick via the
//! constructors below.

use crate::auth::jwt::TokenError;
use crate::auth::password::PasswordError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use devconnect_core::store::StoreError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::ValidationErrors;

/// A single entry in a validation error response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    /// Human-readable message
    pub msg: String,
    /// Offending field, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
}

impl FieldError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            param: None,
        }
    }
}

/// Validation error response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorsBody {
    pub errors: Vec<FieldError>,
}

/// Simple message response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MsgBody {
    pub msg: String,
}

/// Application error type
#[derive(Debug)]
pub enum ApiError {
    /// 400 with a structured errors array
    Validation(Vec<FieldError>),

    /// 401 ownership mismatch, legacy "not authorized" message
    NotAuthorized,

    /// `{"msg": ...}` body with a route-chosen status
    Msg(StatusCode, String),

    /// 500, generic body; the cause is logged and never sent to the client
    Server(String),
}

impl ApiError {
    /// 400 errors-array response with a single message
    pub fn validation_msg(msg: impl Into<String>) -> Self {
        ApiError::Validation(vec![FieldError::new(msg)])
    }

    /// 400 `{"msg": ...}` response
    pub fn bad_request(msg: impl Into<String>) -> Self {
        ApiError::Msg(StatusCode::BAD_REQUEST, msg.into())
    }

    /// 404 `{"msg": ...}` response
    pub fn not_found(msg: impl Into<String>) -> Self {
        ApiError::Msg(StatusCode::NOT_FOUND, msg.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorsBody { errors }),
            )
                .into_response(),
            ApiError::NotAuthorized => (
                StatusCode::UNAUTHORIZED,
                Json(MsgBody {
                    msg: "User not authorized".to_string(),
                }),
            )
                .into_response(),
            ApiError::Msg(status, msg) => (status, Json(MsgBody { msg })).into_response(),
            ApiError::Server(cause) => {
                tracing::error!("{}", cause);
                (StatusCode::INTERNAL_SERVER_ERROR, "Server Error").into_response()
            }
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let fields = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| FieldError {
                    msg: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{field} is invalid")),
                    param: Some(field.to_string()),
                })
            })
            .collect();

        ApiError::Validation(fields)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Server(err.to_string())
    }
}

impl From<PasswordError> for ApiError {
    fn from(err: PasswordError) -> Self {
        ApiError::Server(err.to_string())
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        ApiError::Server(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "Name is required"))]
        name: String,
        #[validate(email(message = "Please include a valid email"))]
        email: String,
    }

    #[test]
    fn test_validation_errors_mapped_to_field_errors() {
        let sample = Sample {
            name: String::new(),
            email: "not-an-email".to_string(),
        };

        let err: ApiError = sample.validate().unwrap_err().into();
        let ApiError::Validation(fields) = err else {
            panic!("expected validation variant");
        };

        let msgs: Vec<&str> = fields.iter().map(|f| f.msg.as_str()).collect();
        assert!(msgs.contains(&"Name is required"));
        assert!(msgs.contains(&"Please include a valid email"));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::validation_msg("x").into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotAuthorized.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::not_found("Post not found").into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Server("boom".to_string()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
