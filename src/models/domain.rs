use serde::{Deserialize, Serialize};

/// Normalized candidate profile, uniform across the backend's payload shapes
///
/// The serde shape matches the backend's flat profile records, so a `Candidate`
/// round-trips through JSON unchanged and doubles as the flat-profile parse
/// target during normalization. Only `profile_id` is required; every other
/// field defaults when the backend omits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub profile_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub schedule: String,
    #[serde(default)]
    pub work_life_priority: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub looking_for: String,
    #[serde(rename = "compatibilityScore", default)]
    pub compatibility_score: Option<f64>,
    #[serde(rename = "matchType", default)]
    pub match_type: Option<String>,
    #[serde(default)]
    pub reasons: Vec<String>,
}

/// Direction of a swipe decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    /// A right swipe accepts the candidate, a left swipe rejects them
    pub fn is_like(&self) -> bool {
        matches!(self, SwipeDirection::Right)
    }
}

impl std::fmt::Display for SwipeDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwipeDirection::Left => write!(f, "left"),
            SwipeDirection::Right => write!(f, "right"),
        }
    }
}

/// Ephemeral record of one user decision; lives only for the duration of the
/// dispatch and is never persisted
#[derive(Debug, Clone, Serialize)]
pub struct DecisionEvent {
    pub direction: SwipeDirection,
    pub candidate_id: String,
    pub dispatched_at: chrono::DateTime<chrono::Utc>,
}

impl DecisionEvent {
    pub fn new(direction: SwipeDirection, candidate_id: &str) -> Self {
        Self {
            direction,
            candidate_id: candidate_id.to_string(),
            dispatched_at: chrono::Utc::now(),
        }
    }
}
