//! GitHub repository lookup
//!
//! Proxies the public repository listing for a username. The response body
//! is passed through untouched; only the 404 case is mapped so the handler
//! can answer with the legacy "No Github profile found" message.

use devconnect_core::config::GithubConfig;
use reqwest::{header, StatusCode};
use thiserror::Error;

/// GitHub lookup errors
#[derive(Debug, Error)]
pub enum GithubError {
    #[error("No Github profile found")]
    NotFound,

    #[error("GitHub request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Client for the GitHub repository listing
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    config: GithubConfig,
}

impl GithubClient {
    pub fn new(config: GithubConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// URL for the five most recently created repositories of a user
    fn repos_url(&self, username: &str) -> String {
        let mut url = format!(
            "{}/users/{}/repos?per_page=5&sort=created:asc",
            self.config.api_base, username
        );

        if let (Some(id), Some(secret)) = (&self.config.client_id, &self.config.client_secret) {
            url.push_str(&format!("&client_id={id}&client_secret={secret}"));
        }

        url
    }

    /// Fetch the repository listing for a username
    pub async fn user_repos(&self, username: &str) -> Result<serde_json::Value, GithubError> {
        let response = self
            .http
            .get(self.repos_url(username))
            // GitHub rejects requests without a user agent
            .header(header::USER_AGENT, "devconnect-api")
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(GithubError::NotFound);
        }

        let response = response.error_for_status()?;
        Ok(response.json().await?)
    }
}
