//! OpenAPI document

use crate::error::{ErrorsBody, FieldError, MsgBody};
use crate::handlers;
use utoipa::OpenApi;

/// Generated API documentation, served at `/api-docs/openapi.json`
#[derive(OpenApi)]
#[openapi(
    info(
        title = "devconnect API",
        description = "REST backend for the devconnect developer network"
    ),
    paths(
        handlers::health::health_check,
        handlers::users::register,
        handlers::auth::login,
        handlers::auth::me,
        handlers::profile::me,
        handlers::profile::upsert,
        handlers::profile::list,
        handlers::profile::by_user,
        handlers::profile::delete,
        handlers::profile::add_experience,
        handlers::profile::delete_experience,
        handlers::profile::add_education,
        handlers::profile::delete_education,
        handlers::profile::github_repos,
        handlers::posts::create,
        handlers::posts::list,
        handlers::posts::get,
        handlers::posts::delete,
        handlers::posts::like,
        handlers::posts::unlike,
        handlers::posts::add_comment,
        handlers::posts::delete_comment,
    ),
    components(schemas(
        ErrorsBody,
        FieldError,
        MsgBody,
        handlers::users::RegisterRequest,
        handlers::users::TokenResponse,
        handlers::auth::LoginRequest,
        handlers::profile::ProfileRequest,
        handlers::profile::ExperienceRequest,
        handlers::profile::EducationRequest,
        handlers::posts::TextRequest,
    )),
    tags(
        (name = "users", description = "Registration"),
        (name = "auth", description = "Login and session"),
        (name = "profile", description = "Career profiles"),
        (name = "posts", description = "Posts, likes, and comments"),
        (name = "health", description = "Liveness"),
    )
)]
pub struct ApiDoc;
