use crate::models::{Candidate, SwipeDirection};
use thiserror::Error;
use tokio::sync::{watch, Mutex};

/// Number of cards rendered at the top of the stack
pub const VISIBLE_WINDOW: usize = 3;

/// Errors returned when a decision cannot start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("no active candidate at the top of the deck")]
    NoActiveCandidate,

    #[error("a decision is already in transition")]
    DecisionInFlight,
}

/// Lifecycle phase of the deck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckPhase {
    Loading,
    Ready,
    Exhausted,
}

/// Read-only view of the deck cursor, published on every state change
#[derive(Debug, Clone, PartialEq)]
pub struct DeckSnapshot {
    pub phase: DeckPhase,
    pub position: usize,
    pub deck_len: usize,
    pub in_transition: bool,
    pub pending_direction: Option<SwipeDirection>,
    pub epoch: u64,
}

/// The candidate returned by `begin_decision`, tagged with the deck epoch it
/// was drawn from so a later settle can be validated against reloads
#[derive(Debug, Clone)]
pub struct ActiveDecision {
    pub candidate: Candidate,
    pub epoch: u64,
}

/// Result of settling a decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleOutcome {
    /// Cursor advanced; more candidates remain
    Advanced { position: usize },
    /// Cursor advanced onto the end of the deck; fires exactly once per deck
    DeckEmpty,
    /// The deck was reloaded (or no decision was pending); nothing changed
    Stale,
}

struct DeckState {
    candidates: Vec<Candidate>,
    position: usize,
    in_transition: bool,
    pending_direction: Option<SwipeDirection>,
    epoch: u64,
    loaded: bool,
}

impl DeckState {
    fn phase(&self) -> DeckPhase {
        if !self.loaded {
            DeckPhase::Loading
        } else if self.position >= self.candidates.len() {
            DeckPhase::Exhausted
        } else {
            DeckPhase::Ready
        }
    }

    fn snapshot(&self) -> DeckSnapshot {
        DeckSnapshot {
            phase: self.phase(),
            position: self.position,
            deck_len: self.candidates.len(),
            in_transition: self.in_transition,
            pending_direction: self.pending_direction,
            epoch: self.epoch,
        }
    }
}

/// The deck state machine
///
/// Holds the ordered candidate sequence and the cursor over it. The deck is
/// replaced wholesale by `load`; the cursor only ever moves forward, one
/// settled decision at a time. `in_transition` is the sole serialization
/// mechanism: a second decision attempt while one is pending is rejected,
/// not queued.
///
/// Every `load` bumps an epoch counter, and `settle` is a no-op unless the
/// caller presents the epoch it drew from `begin_decision`. A slow decision
/// started against an old deck therefore cannot move the cursor of a freshly
/// loaded one.
pub struct DeckEngine {
    state: Mutex<DeckState>,
    changes: watch::Sender<DeckSnapshot>,
}

impl DeckEngine {
    pub fn new() -> Self {
        let state = DeckState {
            candidates: Vec::new(),
            position: 0,
            in_transition: false,
            pending_direction: None,
            epoch: 0,
            loaded: false,
        };
        let (changes, _) = watch::channel(state.snapshot());
        Self {
            state: Mutex::new(state),
            changes,
        }
    }

    /// Subscribe to cursor changes; the receiver always holds the latest
    /// snapshot
    pub fn subscribe(&self) -> watch::Receiver<DeckSnapshot> {
        self.changes.subscribe()
    }

    /// Current snapshot of the deck cursor
    pub async fn snapshot(&self) -> DeckSnapshot {
        self.state.lock().await.snapshot()
    }

    /// Replace the deck wholesale
    ///
    /// Resets the cursor to the top, clears the transition lock, and bumps
    /// the epoch so any in-flight settle against the previous deck is
    /// discarded. Returns the new epoch.
    pub async fn load(&self, candidates: Vec<Candidate>) -> u64 {
        let mut state = self.state.lock().await;
        state.epoch += 1;
        state.candidates = candidates;
        state.position = 0;
        state.in_transition = false;
        state.pending_direction = None;
        state.loaded = true;

        tracing::info!(
            "Deck loaded: {} candidates (epoch {})",
            state.candidates.len(),
            state.epoch
        );

        self.changes.send_replace(state.snapshot());
        state.epoch
    }

    /// The visible top-of-stack window: up to three candidates starting at
    /// the cursor. An empty window signals exhaustion.
    pub async fn visible_window(&self) -> Vec<Candidate> {
        let state = self.state.lock().await;
        let end = (state.position + VISIBLE_WINDOW).min(state.candidates.len());
        state
            .candidates
            .get(state.position..end)
            .map(|window| window.to_vec())
            .unwrap_or_default()
    }

    /// The candidate currently on top, if any
    pub async fn active_candidate(&self) -> Option<Candidate> {
        let state = self.state.lock().await;
        state.candidates.get(state.position).cloned()
    }

    /// Begin a decision on the active candidate
    ///
    /// Fails when the deck is exhausted or another decision is still in
    /// transition. On success the transition lock is held until `settle`.
    pub async fn begin_decision(
        &self,
        direction: SwipeDirection,
    ) -> Result<ActiveDecision, DeckError> {
        let mut state = self.state.lock().await;

        if state.in_transition {
            return Err(DeckError::DecisionInFlight);
        }
        let candidate = state
            .candidates
            .get(state.position)
            .cloned()
            .ok_or(DeckError::NoActiveCandidate)?;

        state.in_transition = true;
        state.pending_direction = Some(direction);

        tracing::debug!(
            "Decision begun: {} on {} at position {}",
            direction,
            candidate.profile_id,
            state.position
        );

        self.changes.send_replace(state.snapshot());
        Ok(ActiveDecision {
            candidate,
            epoch: state.epoch,
        })
    }

    /// Finalize the visual transition and advance the cursor by one
    ///
    /// Runs after the fixed settle delay, independent of the remote call's
    /// outcome. The epoch must match the one `begin_decision` returned;
    /// otherwise the deck was reloaded in the meantime and the settle is
    /// discarded without touching the cursor.
    pub async fn settle(&self, epoch: u64) -> SettleOutcome {
        let mut state = self.state.lock().await;

        if state.epoch != epoch || !state.in_transition {
            tracing::debug!(
                "Ignoring stale settle (epoch {} vs current {})",
                epoch,
                state.epoch
            );
            return SettleOutcome::Stale;
        }

        state.in_transition = false;
        state.pending_direction = None;
        state.position += 1;

        let outcome = if state.position >= state.candidates.len() {
            SettleOutcome::DeckEmpty
        } else {
            SettleOutcome::Advanced {
                position: state.position,
            }
        };

        self.changes.send_replace(state.snapshot());
        outcome
    }
}

impl Default for DeckEngine {
    fn default() -> Self {
        Self::new()
    }
}
