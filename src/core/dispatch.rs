use crate::models::{Candidate, DecisionEvent, LikeRequest, PassRequest, SwipeDirection};
use crate::services::MatchClient;
use std::sync::Arc;

/// Result of relaying one decision to the backend
#[derive(Debug, Clone, PartialEq)]
pub enum DecisionOutcome {
    /// No acting profile configured; nothing was sent
    Preview,
    /// The deck refused the decision (exhausted, or one already in flight)
    Ignored,
    /// Accept recorded and the backend reported a mutual match
    Matched { name: String },
    /// Accept recorded
    Liked { name: String },
    /// Reject recorded
    Passed { name: String },
    /// The remote call failed; the deck still advances
    DispatchFailed { message: String },
}

/// Relays accept/reject decisions to the matching backend
///
/// Owns only the remote half of a decision: it never touches deck state, so
/// a slow or failing backend can never block the deck from advancing. At
/// most one attempt per decision; a failed decision is simply lost from the
/// backend's perspective.
pub struct DecisionDispatcher {
    client: Arc<MatchClient>,
    profile_id: Option<String>,
}

impl DecisionDispatcher {
    pub fn new(client: Arc<MatchClient>, profile_id: Option<String>) -> Self {
        Self { client, profile_id }
    }

    /// Send one decision to the backend and interpret the result
    ///
    /// In preview mode this short-circuits before any network activity.
    pub async fn dispatch(
        &self,
        direction: SwipeDirection,
        candidate: &Candidate,
    ) -> DecisionOutcome {
        let Some(profile_id) = &self.profile_id else {
            tracing::info!(
                "Preview mode: {} on {} not sent to backend",
                direction,
                candidate.profile_id
            );
            return DecisionOutcome::Preview;
        };

        let event = DecisionEvent::new(direction, &candidate.profile_id);
        tracing::debug!(
            "Dispatching {} on {} at {}",
            event.direction,
            event.candidate_id,
            event.dispatched_at
        );

        let outcome = if direction.is_like() {
            let request = LikeRequest {
                liker_id: profile_id.clone(),
                liked_id: candidate.profile_id.clone(),
            };
            match self.client.like(&request).await {
                Ok(response) if response.is_match => DecisionOutcome::Matched {
                    name: candidate.name.clone(),
                },
                Ok(_) => DecisionOutcome::Liked {
                    name: candidate.name.clone(),
                },
                Err(e) => {
                    tracing::warn!("Like dispatch failed for {}: {}", event.candidate_id, e);
                    DecisionOutcome::DispatchFailed {
                        message: e.to_string(),
                    }
                }
            }
        } else {
            let request = PassRequest {
                passer_id: profile_id.clone(),
                passed_id: candidate.profile_id.clone(),
            };
            match self.client.pass(&request).await {
                Ok(()) => DecisionOutcome::Passed {
                    name: candidate.name.clone(),
                },
                Err(e) => {
                    tracing::warn!("Pass dispatch failed for {}: {}", event.candidate_id, e);
                    DecisionOutcome::DispatchFailed {
                        message: e.to_string(),
                    }
                }
            }
        };

        tracing::info!(
            "Decision {} on {} -> {:?}",
            event.direction,
            event.candidate_id,
            outcome
        );
        outcome
    }
}
