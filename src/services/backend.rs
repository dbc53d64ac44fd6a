use crate::models::{FindMatchesRequest, HealthResponse, LikeRequest, LikeResponse, PassRequest};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the matching backend
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("endpoint returned status {0}")]
    Status(u16),

    #[error("invalid response format: {0}")]
    InvalidResponse(String),
}

/// Matching backend API client
///
/// Handles all communication with the matching service:
/// - Health checks
/// - Fetching the raw candidate pool
/// - Ranked match lookups for the acting profile
/// - Recording accept/reject decisions
pub struct MatchClient {
    base_url: String,
    client: Client,
}

impl MatchClient {
    /// Create a new backend client
    pub fn new(base_url: String, timeout_secs: Option<u64>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs.unwrap_or(30)))
            .build()
            .expect("Failed to create HTTP client");

        Self { base_url, client }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Ping the backend health endpoint
    pub async fn health(&self) -> Result<HealthResponse, BackendError> {
        let url = self.url("/api/health");
        tracing::debug!("Checking backend health at: {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(BackendError::Status(response.status().as_u16()));
        }

        Ok(response.json().await?)
    }

    /// Fetch the raw candidate pool
    ///
    /// Returns the payload as-is; the shape varies by backend version, so
    /// interpreting it is left to the normalization layer.
    pub async fn list_profiles(&self) -> Result<Value, BackendError> {
        let url = self.url("/api/profiles");
        tracing::debug!("Fetching profiles from: {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(BackendError::Status(response.status().as_u16()));
        }

        Ok(response.json().await?)
    }

    /// Ranked match lookup for the acting profile
    ///
    /// Like `list_profiles`, the payload is returned raw for the
    /// normalization layer to interpret.
    pub async fn find_matches(&self, request: &FindMatchesRequest) -> Result<Value, BackendError> {
        let url = self.url("/api/match/find");
        tracing::debug!(
            "Requesting up to {} matches for {} from: {}",
            request.max_results,
            request.profile_id,
            url
        );

        let response = self.client.post(&url).json(request).send().await?;
        if !response.status().is_success() {
            return Err(BackendError::Status(response.status().as_u16()));
        }

        Ok(response.json().await?)
    }

    /// Record an accept decision; the response carries the mutual-match flag
    pub async fn like(&self, request: &LikeRequest) -> Result<LikeResponse, BackendError> {
        let url = self.url("/api/match/like");

        let response = self.client.post(&url).json(request).send().await?;
        if !response.status().is_success() {
            return Err(BackendError::Status(response.status().as_u16()));
        }

        Ok(response.json().await?)
    }

    /// Record a reject decision
    pub async fn pass(&self, request: &PassRequest) -> Result<(), BackendError> {
        let url = self.url("/api/match/pass");

        let response = self.client.post(&url).json(request).send().await?;
        if !response.status().is_success() {
            return Err(BackendError::Status(response.status().as_u16()));
        }

        Ok(())
    }
}
