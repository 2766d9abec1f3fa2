//! Document store interface and in-memory implementation
//!
//! The store is an external collaborator as far as the service is concerned:
//! handlers only see the narrow `DocumentStore` trait and treat every failure
//! as an opaque `StoreError`. `MemoryStore` is the bundled implementation,
//! holding each collection behind a `tokio::sync::RwLock`. Writes are
//! last-write-wins; there is no optimistic concurrency control.

use crate::models::{Post, Profile, User};
use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Narrow interface over the document database
///
/// One method per query the handlers perform; no generic query language is
/// exposed. All collections are keyed by `Uuid`.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    // Users
    async fn insert_user(&self, user: User) -> Result<User, StoreError>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;
    async fn delete_user(&self, id: Uuid) -> Result<(), StoreError>;

    // Profiles (one per user, keyed by the owner reference)
    async fn find_profile_by_user(&self, user: Uuid) -> Result<Option<Profile>, StoreError>;
    async fn list_profiles(&self) -> Result<Vec<Profile>, StoreError>;
    async fn save_profile(&self, profile: Profile) -> Result<Profile, StoreError>;
    async fn delete_profile_by_user(&self, user: Uuid) -> Result<(), StoreError>;

    // Posts
    async fn insert_post(&self, post: Post) -> Result<Post, StoreError>;
    async fn find_post_by_id(&self, id: Uuid) -> Result<Option<Post>, StoreError>;
    async fn list_posts(&self) -> Result<Vec<Post>, StoreError>;
    async fn save_post(&self, post: Post) -> Result<Post, StoreError>;
    async fn delete_post(&self, id: Uuid) -> Result<(), StoreError>;
    async fn delete_posts_by_user(&self, user: Uuid) -> Result<(), StoreError>;
}

/// In-memory document store
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<Uuid, User>>,
    profiles: RwLock<HashMap<Uuid, Profile>>,
    posts: RwLock<HashMap<Uuid, Post>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_user(&self, user: User) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn delete_user(&self, id: Uuid) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        users.remove(&id);
        Ok(())
    }

    async fn find_profile_by_user(&self, user: Uuid) -> Result<Option<Profile>, StoreError> {
        let profiles = self.profiles.read().await;
        Ok(profiles.get(&user).cloned())
    }

    async fn list_profiles(&self) -> Result<Vec<Profile>, StoreError> {
        let profiles = self.profiles.read().await;
        let mut all: Vec<Profile> = profiles.values().cloned().collect();
        all.sort_by_key(|p| p.date);
        Ok(all)
    }

    async fn save_profile(&self, profile: Profile) -> Result<Profile, StoreError> {
        let mut profiles = self.profiles.write().await;
        profiles.insert(profile.user, profile.clone());
        Ok(profile)
    }

    async fn delete_profile_by_user(&self, user: Uuid) -> Result<(), StoreError> {
        let mut profiles = self.profiles.write().await;
        profiles.remove(&user);
        Ok(())
    }

    async fn insert_post(&self, post: Post) -> Result<Post, StoreError> {
        let mut posts = self.posts.write().await;
        posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn find_post_by_id(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        let posts = self.posts.read().await;
        Ok(posts.get(&id).cloned())
    }

    async fn list_posts(&self) -> Result<Vec<Post>, StoreError> {
        let posts = self.posts.read().await;
        let mut all: Vec<Post> = posts.values().cloned().collect();
        // Newest first
        all.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(all)
    }

    async fn save_post(&self, post: Post) -> Result<Post, StoreError> {
        let mut posts = self.posts.write().await;
        posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn delete_post(&self, id: Uuid) -> Result<(), StoreError> {
        let mut posts = self.posts.write().await;
        posts.remove(&id);
        Ok(())
    }

    async fn delete_posts_by_user(&self, user: Uuid) -> Result<(), StoreError> {
        let mut posts = self.posts.write().await;
        posts.retain(|_, p| p.user != user);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Comment, Like};
    use chrono::{Duration, Utc};

    fn sample_user(email: &str) -> User {
        User::new(
            "Test User".to_string(),
            email.to_string(),
            "hash".to_string(),
            "avatar".to_string(),
        )
    }

    #[tokio::test]
    async fn test_user_crud() {
        let store = MemoryStore::new();
        let user = store.insert_user(sample_user("a@example.com")).await.unwrap();

        let by_email = store.find_user_by_email("a@example.com").await.unwrap();
        assert_eq!(by_email.unwrap().id, user.id);

        let by_id = store.find_user_by_id(user.id).await.unwrap();
        assert!(by_id.is_some());

        assert!(store.find_user_by_email("b@example.com").await.unwrap().is_none());

        store.delete_user(user.id).await.unwrap();
        assert!(store.find_user_by_id(user.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_profile_keyed_by_owner() {
        let store = MemoryStore::new();
        let owner = Uuid::new_v4();

        let profile = Profile::new(owner, "Developer".to_string(), vec!["Rust".to_string()]);
        store.save_profile(profile.clone()).await.unwrap();

        let found = store.find_profile_by_user(owner).await.unwrap().unwrap();
        assert_eq!(found.id, profile.id);

        // Saving again overwrites (last-write-wins)
        let mut updated = found;
        updated.status = "Senior Developer".to_string();
        store.save_profile(updated).await.unwrap();

        let found = store.find_profile_by_user(owner).await.unwrap().unwrap();
        assert_eq!(found.status, "Senior Developer");
        assert_eq!(store.list_profiles().await.unwrap().len(), 1);

        store.delete_profile_by_user(owner).await.unwrap();
        assert!(store.find_profile_by_user(owner).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_posts_listed_newest_first() {
        let store = MemoryStore::new();
        let user = Uuid::new_v4();

        let mut older = Post::new(user, "first".to_string(), "n".to_string(), "a".to_string());
        older.date = Utc::now() - Duration::hours(1);
        let newer = Post::new(user, "second".to_string(), "n".to_string(), "a".to_string());

        store.insert_post(older).await.unwrap();
        store.insert_post(newer).await.unwrap();

        let posts = store.list_posts().await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].text, "second");
        assert_eq!(posts[1].text, "first");
    }

    #[tokio::test]
    async fn test_sub_collections_persist_through_save() {
        let store = MemoryStore::new();
        let author = Uuid::new_v4();
        let commenter = Uuid::new_v4();

        let mut post = Post::new(author, "text".to_string(), "n".to_string(), "a".to_string());
        store.insert_post(post.clone()).await.unwrap();

        post.likes.insert(0, Like::new(commenter));
        post.comments.insert(
            0,
            Comment {
                id: Uuid::new_v4(),
                user: commenter,
                text: "nice".to_string(),
                name: "Commenter".to_string(),
                avatar: "a".to_string(),
                date: Utc::now(),
            },
        );
        store.save_post(post.clone()).await.unwrap();

        let found = store.find_post_by_id(post.id).await.unwrap().unwrap();
        assert_eq!(found.likes.len(), 1);
        assert_eq!(found.comments.len(), 1);
        assert_eq!(found.comments[0].text, "nice");
    }

    #[tokio::test]
    async fn test_delete_posts_by_user() {
        let store = MemoryStore::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        store
            .insert_post(Post::new(alice, "a1".to_string(), "n".to_string(), "a".to_string()))
            .await
            .unwrap();
        store
            .insert_post(Post::new(alice, "a2".to_string(), "n".to_string(), "a".to_string()))
            .await
            .unwrap();
        store
            .insert_post(Post::new(bob, "b1".to_string(), "n".to_string(), "a".to_string()))
            .await
            .unwrap();

        store.delete_posts_by_user(alice).await.unwrap();

        let posts = store.list_posts().await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].user, bob);
    }
}
