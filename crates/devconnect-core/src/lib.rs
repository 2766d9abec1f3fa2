//! devconnect core - domain models, store interface, and shared types
//!
//! This crate defines the abstractions shared by the devconnect services:
//! - Domain models (users, profiles, posts and their sub-collections)
//! - The `DocumentStore` trait and its in-memory implementation
//! - Configuration management

pub mod config;
pub mod models;
pub mod store;

pub use config::{AppConfig, AuthConfig, ConfigError, GithubConfig, ServerConfig};
pub use models::{Comment, Education, Experience, Like, Post, Profile, Social, User};
pub use store::{DocumentStore, MemoryStore, StoreError};

pub type Result<T> = std::result::Result<T, StoreError>;
