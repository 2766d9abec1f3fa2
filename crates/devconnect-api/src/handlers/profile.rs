//! Profile CRUD, experience/education entries, and the GitHub lookup

use crate::auth::AuthUser;
use crate::error::{ApiError, MsgBody};
use crate::github::GithubError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Extension, Json,
};
use chrono::{DateTime, Utc};
use devconnect_core::models::{Education, Experience, Profile, Social, User};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

const NO_PROFILE_MSG: &str = "There is no profile for this user";

/// Owner fields populated into profile reads
#[derive(Debug, Serialize)]
pub struct ProfileOwner {
    pub id: Uuid,
    pub name: String,
    pub avatar: String,
}

/// Profile read view with the owner reference populated
///
/// The stored document keeps only the owner id; reads join in the owner's
/// name and avatar the way the original listing did.
#[derive(Debug, Serialize)]
pub struct ProfileView {
    pub id: Uuid,
    pub user: Option<ProfileOwner>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub status: String,
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub githubusername: Option<String>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub social: Social,
    pub date: DateTime<Utc>,
}

impl ProfileView {
    fn new(profile: Profile, owner: Option<&User>) -> Self {
        Self {
            id: profile.id,
            user: owner.map(|u| ProfileOwner {
                id: u.id,
                name: u.name.clone(),
                avatar: u.avatar.clone(),
            }),
            company: profile.company,
            website: profile.website,
            location: profile.location,
            status: profile.status,
            skills: profile.skills,
            bio: profile.bio,
            githubusername: profile.githubusername,
            experience: profile.experience,
            education: profile.education,
            social: profile.social,
            date: profile.date,
        }
    }
}

/// Create-or-update profile request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ProfileRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,

    /// Comma-separated skill list
    #[serde(default)]
    #[validate(length(min = 1, message = "Skills is required"))]
    pub skills: String,

    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub githubusername: Option<String>,

    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

/// Work experience request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ExperienceRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Company is required"))]
    pub company: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "From date is required"))]
    pub from: String,

    pub location: Option<String>,
    pub to: Option<String>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

/// Education request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct EducationRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "School is required"))]
    pub school: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Degree is required"))]
    pub degree: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Field of study is required"))]
    pub fieldofstudy: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "From date is required"))]
    pub from: String,

    pub to: Option<String>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

async fn load_profile(state: &AppState, user: Uuid) -> Result<Profile, ApiError> {
    state
        .store
        .find_profile_by_user(user)
        .await?
        .ok_or_else(|| ApiError::bad_request(NO_PROFILE_MSG))
}

/// Get the caller's own profile
#[utoipa::path(
    get,
    path = "/api/profile/me",
    tag = "profile",
    responses(
        (status = 200, description = "Caller's profile with owner populated"),
        (status = 400, description = "No profile exists", body = MsgBody),
        (status = 401, description = "Missing or invalid token", body = MsgBody),
    )
)]
pub async fn me(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<ProfileView>, ApiError> {
    let profile = load_profile(&state, user.id).await?;
    let owner = state.store.find_user_by_id(profile.user).await?;
    Ok(Json(ProfileView::new(profile, owner.as_ref())))
}

/// Create or update the caller's profile
///
/// Updates touch the career and social fields only; existing experience and
/// education entries are preserved.
#[utoipa::path(
    post,
    path = "/api/profile",
    tag = "profile",
    request_body = ProfileRequest,
    responses(
        (status = 200, description = "Created or updated profile"),
        (status = 400, description = "Validation failure", body = crate::error::ErrorsBody),
        (status = 401, description = "Missing or invalid token", body = MsgBody),
    )
)]
pub async fn upsert(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<ProfileRequest>,
) -> Result<Json<Profile>, ApiError> {
    request.validate()?;

    let skills: Vec<String> = request
        .skills
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    let mut profile = match state.store.find_profile_by_user(user.id).await? {
        Some(existing) => existing,
        None => Profile::new(user.id, request.status.clone(), Vec::new()),
    };

    profile.status = request.status;
    profile.skills = skills;

    // Omitted optional fields keep their stored values; only the social
    // links are replaced wholesale.
    if request.company.is_some() {
        profile.company = request.company;
    }
    if request.website.is_some() {
        profile.website = request.website;
    }
    if request.location.is_some() {
        profile.location = request.location;
    }
    if request.bio.is_some() {
        profile.bio = request.bio;
    }
    if request.githubusername.is_some() {
        profile.githubusername = request.githubusername;
    }

    profile.social = Social {
        youtube: request.youtube,
        twitter: request.twitter,
        facebook: request.facebook,
        linkedin: request.linkedin,
        instagram: request.instagram,
    };

    let profile = state.store.save_profile(profile).await?;
    Ok(Json(profile))
}

/// List all profiles
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "profile",
    responses(
        (status = 200, description = "All profiles with owners populated"),
        (status = 500, description = "Server error"),
    )
)]
pub async fn list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ProfileView>>, ApiError> {
    let profiles = state.store.list_profiles().await?;

    let mut views = Vec::with_capacity(profiles.len());
    for profile in profiles {
        let owner = state.store.find_user_by_id(profile.user).await?;
        views.push(ProfileView::new(profile, owner.as_ref()));
    }

    Ok(Json(views))
}

/// Get a profile by its owner's user id
#[utoipa::path(
    get,
    path = "/api/profile/user/{user_id}",
    tag = "profile",
    params(("user_id" = String, Path, description = "Owner user id")),
    responses(
        (status = 200, description = "Profile with owner populated"),
        (status = 400, description = "Profile not found", body = MsgBody),
    )
)]
pub async fn by_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<ProfileView>, ApiError> {
    // A malformed id answers the same way as a missing profile
    let user_id = Uuid::parse_str(&user_id)
        .map_err(|_| ApiError::bad_request("Profile not found"))?;

    let profile = state
        .store
        .find_profile_by_user(user_id)
        .await?
        .ok_or_else(|| ApiError::bad_request("Profile not found"))?;

    let owner = state.store.find_user_by_id(profile.user).await?;
    Ok(Json(ProfileView::new(profile, owner.as_ref())))
}

/// Delete the caller's posts, profile, and user record
#[utoipa::path(
    delete,
    path = "/api/profile",
    tag = "profile",
    responses(
        (status = 200, description = "User deleted", body = MsgBody),
        (status = 401, description = "Missing or invalid token", body = MsgBody),
    )
)]
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<MsgBody>, ApiError> {
    state.store.delete_posts_by_user(user.id).await?;
    state.store.delete_profile_by_user(user.id).await?;
    state.store.delete_user(user.id).await?;

    Ok(Json(MsgBody {
        msg: "User deleted".to_string(),
    }))
}

/// Add a work experience entry (newest first)
#[utoipa::path(
    put,
    path = "/api/profile/experience",
    tag = "profile",
    request_body = ExperienceRequest,
    responses(
        (status = 200, description = "Updated profile"),
        (status = 400, description = "Validation failure or no profile", body = crate::error::ErrorsBody),
        (status = 401, description = "Missing or invalid token", body = MsgBody),
    )
)]
pub async fn add_experience(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<ExperienceRequest>,
) -> Result<Json<Profile>, ApiError> {
    request.validate()?;

    let mut profile = load_profile(&state, user.id).await?;
    profile.experience.insert(
        0,
        Experience {
            id: Uuid::new_v4(),
            title: request.title,
            company: request.company,
            location: request.location,
            from: request.from,
            to: request.to,
            current: request.current,
            description: request.description,
        },
    );

    let profile = state.store.save_profile(profile).await?;
    Ok(Json(profile))
}

/// Remove a work experience entry by id
#[utoipa::path(
    delete,
    path = "/api/profile/experience/{exp_id}",
    tag = "profile",
    params(("exp_id" = Uuid, Path, description = "Experience entry id")),
    responses(
        (status = 200, description = "Updated profile"),
        (status = 400, description = "No profile exists", body = MsgBody),
        (status = 401, description = "Missing or invalid token", body = MsgBody),
    )
)]
pub async fn delete_experience(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(exp_id): Path<Uuid>,
) -> Result<Json<Profile>, ApiError> {
    let mut profile = load_profile(&state, user.id).await?;
    profile.experience.retain(|e| e.id != exp_id);

    let profile = state.store.save_profile(profile).await?;
    Ok(Json(profile))
}

/// Add an education entry (newest first)
#[utoipa::path(
    put,
    path = "/api/profile/education",
    tag = "profile",
    request_body = EducationRequest,
    responses(
        (status = 200, description = "Updated profile"),
        (status = 400, description = "Validation failure or no profile", body = crate::error::ErrorsBody),
        (status = 401, description = "Missing or invalid token", body = MsgBody),
    )
)]
pub async fn add_education(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<EducationRequest>,
) -> Result<Json<Profile>, ApiError> {
    request.validate()?;

    let mut profile = load_profile(&state, user.id).await?;
    profile.education.insert(
        0,
        Education {
            id: Uuid::new_v4(),
            school: request.school,
            degree: request.degree,
            fieldofstudy: request.fieldofstudy,
            from: request.from,
            to: request.to,
            current: request.current,
            description: request.description,
        },
    );

    let profile = state.store.save_profile(profile).await?;
    Ok(Json(profile))
}

/// Remove an education entry by id
#[utoipa::path(
    delete,
    path = "/api/profile/education/{edu_id}",
    tag = "profile",
    params(("edu_id" = Uuid, Path, description = "Education entry id")),
    responses(
        (status = 200, description = "Updated profile"),
        (status = 400, description = "No profile exists", body = MsgBody),
        (status = 401, description = "Missing or invalid token", body = MsgBody),
    )
)]
pub async fn delete_education(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(edu_id): Path<Uuid>,
) -> Result<Json<Profile>, ApiError> {
    let mut profile = load_profile(&state, user.id).await?;
    profile.education.retain(|e| e.id != edu_id);

    let profile = state.store.save_profile(profile).await?;
    Ok(Json(profile))
}

/// List a GitHub user's latest repositories
#[utoipa::path(
    get,
    path = "/api/profile/github/{username}",
    tag = "profile",
    params(("username" = String, Path, description = "GitHub username")),
    responses(
        (status = 200, description = "Repository listing"),
        (status = 404, description = "No Github profile found", body = MsgBody),
        (status = 500, description = "Server error"),
    )
)]
pub async fn github_repos(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let repos = state.github.user_repos(&username).await.map_err(|e| match e {
        GithubError::NotFound => ApiError::not_found("No Github profile found"),
        GithubError::Request(err) => ApiError::Server(err.to_string()),
    })?;

    Ok(Json(repos))
}
