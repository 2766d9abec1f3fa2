//! Post CRUD, likes, and comments

use crate::auth::{authz::ensure_owner, AuthUser};
use crate::error::{ApiError, MsgBody};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Extension, Json,
};
use devconnect_core::models::{Comment, Like, Post, User};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

const POST_NOT_FOUND_MSG: &str = "Post not found";

/// Post or comment body
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct TextRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Text is required"))]
    pub text: String,
}

async fn load_post(state: &AppState, id: &str) -> Result<Post, ApiError> {
    // A malformed id answers the same way as a missing post
    let id = Uuid::parse_str(id).map_err(|_| ApiError::not_found(POST_NOT_FOUND_MSG))?;

    state
        .store
        .find_post_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(POST_NOT_FOUND_MSG))
}

async fn load_author(state: &AppState, id: Uuid) -> Result<User, ApiError> {
    state
        .store
        .find_user_by_id(id)
        .await?
        .ok_or_else(|| ApiError::Server(format!("no user record for authenticated id {id}")))
}

/// Create a post
///
/// Author name and avatar are denormalised from the user record at
/// creation time.
#[utoipa::path(
    post,
    path = "/api/posts",
    tag = "posts",
    request_body = TextRequest,
    responses(
        (status = 200, description = "Created post"),
        (status = 400, description = "Validation failure", body = crate::error::ErrorsBody),
        (status = 401, description = "Missing or invalid token", body = MsgBody),
    )
)]
pub async fn create(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<TextRequest>,
) -> Result<Json<Post>, ApiError> {
    request.validate()?;

    let author = load_author(&state, user.id).await?;
    let post = state
        .store
        .insert_post(Post::new(user.id, request.text, author.name, author.avatar))
        .await?;

    Ok(Json(post))
}

/// List all posts, newest first
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = "posts",
    responses(
        (status = 200, description = "All posts"),
        (status = 401, description = "Missing or invalid token", body = MsgBody),
    )
)]
pub async fn list(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Post>>, ApiError> {
    let posts = state.store.list_posts().await?;
    Ok(Json(posts))
}

/// Get a post by id
#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    tag = "posts",
    params(("id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "The post"),
        (status = 404, description = "Post not found", body = MsgBody),
        (status = 401, description = "Missing or invalid token", body = MsgBody),
    )
)]
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Post>, ApiError> {
    let post = load_post(&state, &id).await?;
    Ok(Json(post))
}

/// Delete a post (owner only)
#[utoipa::path(
    delete,
    path = "/api/posts/{id}",
    tag = "posts",
    params(("id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post removed", body = MsgBody),
        (status = 401, description = "Not the owner", body = MsgBody),
        (status = 404, description = "Post not found", body = MsgBody),
    )
)]
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<MsgBody>, ApiError> {
    let post = load_post(&state, &id).await?;
    ensure_owner(user.id, post.user)?;

    state.store.delete_post(post.id).await?;
    Ok(Json(MsgBody {
        msg: "Post removed".to_string(),
    }))
}

/// Like a post
///
/// Rejected when the caller already appears in the likes collection; this
/// is an idempotency guard, not a toggle.
#[utoipa::path(
    put,
    path = "/api/posts/like/{id}",
    tag = "posts",
    params(("id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "Updated likes"),
        (status = 400, description = "Post already liked", body = MsgBody),
        (status = 401, description = "Missing or invalid token", body = MsgBody),
        (status = 404, description = "Post not found", body = MsgBody),
    )
)]
pub async fn like(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Like>>, ApiError> {
    let mut post = load_post(&state, &id).await?;

    if post.liked_by(user.id) {
        return Err(ApiError::bad_request("Post already liked"));
    }

    post.likes.insert(0, Like::new(user.id));
    let post = state.store.save_post(post).await?;

    Ok(Json(post.likes))
}

/// Remove a like from a post
#[utoipa::path(
    put,
    path = "/api/posts/unlike/{id}",
    tag = "posts",
    params(("id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "Updated likes"),
        (status = 400, description = "Post has not yet been liked", body = MsgBody),
        (status = 401, description = "Missing or invalid token", body = MsgBody),
        (status = 404, description = "Post not found", body = MsgBody),
    )
)]
pub async fn unlike(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Like>>, ApiError> {
    let mut post = load_post(&state, &id).await?;

    if !post.liked_by(user.id) {
        return Err(ApiError::bad_request("Post has not yet been liked"));
    }

    post.likes.retain(|like| like.user != user.id);
    let post = state.store.save_post(post).await?;

    Ok(Json(post.likes))
}

/// Comment on a post (newest first)
#[utoipa::path(
    post,
    path = "/api/posts/comment/{id}",
    tag = "posts",
    params(("id" = String, Path, description = "Post id")),
    request_body = TextRequest,
    responses(
        (status = 200, description = "Updated comments"),
        (status = 400, description = "Validation failure", body = crate::error::ErrorsBody),
        (status = 401, description = "Missing or invalid token", body = MsgBody),
        (status = 404, description = "Post not found", body = MsgBody),
    )
)]
pub async fn add_comment(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(request): Json<TextRequest>,
) -> Result<Json<Vec<Comment>>, ApiError> {
    request.validate()?;

    let mut post = load_post(&state, &id).await?;
    let author = load_author(&state, user.id).await?;

    post.comments.insert(
        0,
        Comment {
            id: Uuid::new_v4(),
            user: user.id,
            text: request.text,
            name: author.name,
            avatar: author.avatar,
            date: chrono::Utc::now(),
        },
    );

    let post = state.store.save_post(post).await?;
    Ok(Json(post.comments))
}

/// Delete a comment (author only)
#[utoipa::path(
    delete,
    path = "/api/posts/comment/{id}/{comment_id}",
    tag = "posts",
    params(
        ("id" = String, Path, description = "Post id"),
        ("comment_id" = String, Path, description = "Comment id"),
    ),
    responses(
        (status = 200, description = "Updated comments"),
        (status = 401, description = "Not the comment author", body = MsgBody),
        (status = 404, description = "Post or comment not found", body = MsgBody),
    )
)]
pub async fn delete_comment(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path((id, comment_id)): Path<(String, String)>,
) -> Result<Json<Vec<Comment>>, ApiError> {
    let mut post = load_post(&state, &id).await?;

    // A malformed id answers the same way as a missing comment
    let comment_id = Uuid::parse_str(&comment_id)
        .map_err(|_| ApiError::not_found("Comment does not exist"))?;

    let comment = post
        .comments
        .iter()
        .find(|c| c.id == comment_id)
        .ok_or_else(|| ApiError::not_found("Comment does not exist"))?;

    ensure_owner(user.id, comment.user)?;

    // Legacy quirk, kept intact: the removal index is located by the acting
    // user's id rather than the comment id, so with several comments by the
    // same author the most recent one is removed.
    if let Some(index) = post.comments.iter().position(|c| c.user == user.id) {
        post.comments.remove(index);
    }

    let post = state.store.save_post(post).await?;
    Ok(Json(post.comments))
}
