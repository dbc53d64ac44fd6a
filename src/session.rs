use crate::config::Settings;
use crate::core::{
    fallback_candidates, normalize, DeckEngine, DecisionDispatcher, DecisionOutcome, SettleOutcome,
};
use crate::models::{Candidate, FindMatchesRequest, SwipeDirection};
use crate::services::{BackendError, MatchClient};
use std::sync::Arc;
use std::time::Duration;

/// Result of (re)loading the deck
///
/// Loading never fails: when the backend is unreachable or returns nothing
/// usable, the fixed fallback candidates are substituted and `advisory`
/// carries a non-fatal status message for the UI.
#[derive(Debug, Clone)]
pub struct DeckLoad {
    /// Backend reachability line, e.g. "Server online · Ready to mingle"
    pub status: String,
    /// Non-fatal warning when the fallback deck was substituted
    pub advisory: Option<String>,
    pub candidate_count: usize,
    pub used_fallback: bool,
    pub epoch: u64,
}

/// One swipe session: a deck, its dispatcher, and the load policy
///
/// Owns the coordination between the visual settle timer and the remote
/// decision call. The two are independent: the settle task is scheduled
/// before the dispatch is awaited, so the deck always advances after the
/// fixed delay whether the backend answered, failed, or was never contacted
/// (preview mode).
pub struct SwipeSession {
    client: Arc<MatchClient>,
    deck: Arc<DeckEngine>,
    dispatcher: DecisionDispatcher,
    profile_id: Option<String>,
    max_results: u16,
    settle_delay: Duration,
}

impl SwipeSession {
    pub fn new(settings: &Settings) -> Self {
        let client = Arc::new(MatchClient::new(
            settings.backend.base_url.clone(),
            settings.backend.timeout_secs,
        ));
        Self::with_client(client, settings)
    }

    /// Build a session around an existing client (used by tests to point at
    /// a stub server)
    pub fn with_client(client: Arc<MatchClient>, settings: &Settings) -> Self {
        let profile_id = settings.session.active_profile_id();
        Self {
            deck: Arc::new(DeckEngine::new()),
            dispatcher: DecisionDispatcher::new(Arc::clone(&client), profile_id.clone()),
            client,
            profile_id,
            max_results: settings.session.max_results,
            settle_delay: Duration::from_millis(settings.swipe.settle_ms),
        }
    }

    pub fn deck(&self) -> Arc<DeckEngine> {
        Arc::clone(&self.deck)
    }

    pub fn is_preview(&self) -> bool {
        self.profile_id.is_none()
    }

    /// Fetch, normalize, and load a fresh deck
    ///
    /// With an acting profile configured this asks for ranked matches;
    /// otherwise it falls back to the raw profile list. Any failure or an
    /// empty result substitutes the fixed fallback deck.
    pub async fn refresh(&self) -> DeckLoad {
        let status = match self.client.health().await {
            Ok(health) => format!(
                "Server online · {}",
                health.message.as_deref().unwrap_or("Ready to mingle")
            ),
            Err(BackendError::Status(code)) => format!("Server reachable but returned {}", code),
            Err(e) => {
                tracing::warn!("Health check failed: {}", e);
                "Backend unavailable · using sample profiles".to_string()
            }
        };

        let (candidates, advisory, used_fallback) = match self.fetch_candidates().await {
            Ok(normalized) if normalized.is_empty() => (
                fallback_candidates(),
                Some("No profiles yet · showing curated matches".to_string()),
                true,
            ),
            Ok(normalized) => (normalized, None, false),
            Err(e) => {
                tracing::error!("Failed to load candidates: {}", e);
                (fallback_candidates(), Some(e.to_string()), true)
            }
        };

        let candidate_count = candidates.len();
        let epoch = self.deck.load(candidates).await;

        DeckLoad {
            status,
            advisory,
            candidate_count,
            used_fallback,
            epoch,
        }
    }

    async fn fetch_candidates(&self) -> Result<Vec<Candidate>, BackendError> {
        let payload = match &self.profile_id {
            Some(profile_id) => {
                let request = FindMatchesRequest {
                    profile_id: profile_id.clone(),
                    max_results: self.max_results,
                };
                self.client.find_matches(&request).await?
            }
            None => self.client.list_profiles().await?,
        };

        Ok(normalize(&payload))
    }

    /// Act on the top candidate
    ///
    /// Locks the deck, schedules the settle task for the fixed visual delay,
    /// then relays the decision to the backend. Returns `Ignored` when the
    /// deck refuses the decision (exhausted, or one already in transition).
    pub async fn swipe(&self, direction: SwipeDirection) -> DecisionOutcome {
        let active = match self.deck.begin_decision(direction).await {
            Ok(active) => active,
            Err(e) => {
                tracing::debug!("Swipe {} ignored: {}", direction, e);
                return DecisionOutcome::Ignored;
            }
        };

        // The settle runs on its own timer, not on the network round-trip.
        // The epoch guard discards it if the deck is reloaded in between.
        let deck = Arc::clone(&self.deck);
        let epoch = active.epoch;
        let delay = self.settle_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            match deck.settle(epoch).await {
                SettleOutcome::DeckEmpty => tracing::info!("Deck exhausted"),
                SettleOutcome::Stale => {
                    tracing::debug!("Settle discarded: deck reloaded during transition")
                }
                SettleOutcome::Advanced { position } => {
                    tracing::debug!("Deck advanced to position {}", position)
                }
            }
        });

        self.dispatcher.dispatch(direction, &active.candidate).await
    }
}
