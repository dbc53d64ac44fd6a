use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Response to an accept decision
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeResponse {
    #[serde(default)]
    pub is_match: bool,
}
