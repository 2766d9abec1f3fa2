//! API route definitions
//!
//! Exact legacy paths are preserved. Protected routes sit behind the auth
//! guard; public routes bypass it.

use crate::auth::middleware::auth_middleware;
use crate::handlers::{auth, posts, profile, users};
use crate::state::AppState;
use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

/// Create the `/api` routes
pub fn api_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    // Public routes (no authentication required)
    let public_routes = Router::new()
        .route("/users", post(users::register))
        .route("/auth", post(auth::login))
        .route("/profile", get(profile::list))
        .route("/profile/user/:user_id", get(profile::by_user))
        .route("/profile/github/:username", get(profile::github_repos));

    // Protected routes (token header required)
    let protected_routes = Router::new()
        .route("/auth", get(auth::me))
        // Profile endpoints
        .route("/profile/me", get(profile::me))
        .route("/profile", post(profile::upsert).delete(profile::delete))
        .route("/profile/experience", put(profile::add_experience))
        .route("/profile/experience/:exp_id", delete(profile::delete_experience))
        .route("/profile/education", put(profile::add_education))
        .route("/profile/education/:edu_id", delete(profile::delete_education))
        // Post endpoints
        .route("/posts", post(posts::create).get(posts::list))
        .route("/posts/:id", get(posts::get).delete(posts::delete))
        .route("/posts/like/:id", put(posts::like))
        .route("/posts/unlike/:id", put(posts::unlike))
        .route("/posts/comment/:id", post(posts::add_comment))
        .route("/posts/comment/:id/:comment_id", delete(posts::delete_comment))
        .layer(middleware::from_fn_with_state(state, auth_middleware));

    // Combine routes
    Router::new().merge(public_routes).merge(protected_routes)
}
