use serde::{Deserialize, Serialize};

/// Request for a ranked match lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMatchesRequest {
    pub profile_id: String,
    pub max_results: u16,
}

/// Request to record an accept decision
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeRequest {
    pub liker_id: String,
    pub liked_id: String,
}

/// Request to record a reject decision
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassRequest {
    pub passer_id: String,
    pub passed_id: String,
}
