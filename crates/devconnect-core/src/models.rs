//! Domain models for devconnect
//!
//! Documents held in the store:
//! - `User`: account record (credentials, avatar)
//! - `Profile`: one-to-one career profile with experience/education entries
//! - `Post`: user post with likes and comments
//!
//! Sub-collection entries (experience, education, comments, likes) carry
//! their own identifiers so they can be removed individually later.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User account record
///
/// The password field holds the argon2 PHC hash and is never serialized in
/// API responses.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: Uuid,

    pub name: String,

    /// Email address (unique, used for login)
    pub email: String,

    /// Hashed password, excluded from all responses
    #[serde(skip_serializing)]
    pub password: String,

    /// Avatar URL derived from the email address
    pub avatar: String,

    pub date: DateTime<Utc>,
}

impl User {
    pub fn new(name: String, email: String, password: String, avatar: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password,
            avatar,
            date: Utc::now(),
        }
    }
}

/// Social links attached to a profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Social {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

/// Work experience entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub from: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default)]
    pub current: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Education entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub id: Uuid,
    pub school: String,
    pub degree: String,
    pub fieldofstudy: String,
    pub from: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default)]
    pub current: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Career profile, one per user
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub id: Uuid,

    /// Owner reference
    pub user: Uuid,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Professional status, required
    pub status: String,

    /// Skill list, required
    pub skills: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub githubusername: Option<String>,

    /// Newest entries first
    pub experience: Vec<Experience>,

    /// Newest entries first
    pub education: Vec<Education>,

    pub social: Social,

    pub date: DateTime<Utc>,
}

impl Profile {
    pub fn new(user: Uuid, status: String, skills: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user,
            company: None,
            website: None,
            location: None,
            status,
            skills,
            bio: None,
            githubusername: None,
            experience: Vec::new(),
            education: Vec::new(),
            social: Social::default(),
            date: Utc::now(),
        }
    }
}

/// Like entry on a post, one per user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Like {
    pub id: Uuid,

    /// User who liked the post
    pub user: Uuid,
}

impl Like {
    pub fn new(user: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            user,
        }
    }
}

/// Comment entry on a post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,

    /// Comment author
    pub user: Uuid,

    pub text: String,

    /// Author name, denormalised at creation time
    pub name: String,

    /// Author avatar, denormalised at creation time
    pub avatar: String,

    pub date: DateTime<Utc>,
}

/// User post with likes and comments
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub id: Uuid,

    /// Owner reference
    pub user: Uuid,

    pub text: String,

    /// Author name, denormalised at creation time
    pub name: String,

    /// Author avatar, denormalised at creation time
    pub avatar: String,

    /// Newest likes first
    pub likes: Vec<Like>,

    /// Newest comments first
    pub comments: Vec<Comment>,

    pub date: DateTime<Utc>,
}

impl Post {
    pub fn new(user: Uuid, text: String, name: String, avatar: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user,
            text,
            name,
            avatar,
            likes: Vec::new(),
            comments: Vec::new(),
            date: Utc::now(),
        }
    }

    /// Whether the given user already appears in the likes collection
    pub fn liked_by(&self, user: Uuid) -> bool {
        self.likes.iter().any(|like| like.user == user)
    }
}
