//! devconnect API - REST server
//!
//! Provides HTTP endpoints for users, authentication, profiles, and posts.

pub mod auth;
pub mod doc;
pub mod error;
pub mod github;
pub mod handlers;
pub mod routes;
pub mod state;

use axum::{routing::get, Json, Router};
use state::AppState;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

/// Build the full application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health_check))
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(doc::ApiDoc::openapi()) }),
        )
        .nest("/api", routes::api_routes(state.clone()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
