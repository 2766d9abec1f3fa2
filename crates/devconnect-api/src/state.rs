//! Application state shared across handlers

use crate::github::GithubClient;
use devconnect_core::config::AppConfig;
use devconnect_core::store::{DocumentStore, MemoryStore};
use std::sync::Arc;
use std::time::Instant;

/// Shared application state
///
/// Built once at startup from the loaded configuration; nothing here is
/// consulted from the environment afterwards.
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,
    /// Document store
    pub store: Arc<dyn DocumentStore>,
    /// GitHub lookup client
    pub github: GithubClient,
    /// Server start time
    pub start_time: Instant,
}

impl AppState {
    /// Create state backed by the in-memory store
    pub fn new(config: AppConfig) -> Self {
        let store = Arc::new(MemoryStore::new());
        Self::with_store(config, store)
    }

    /// Create state over an explicit store implementation
    pub fn with_store(config: AppConfig, store: Arc<dyn DocumentStore>) -> Self {
        let github = GithubClient::new(config.github.clone());
        Self {
            config,
            store,
            github,
            start_time: Instant::now(),
        }
    }

    /// Uptime in seconds
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
