//! LinkMatch - Swipe-deck engine for the LinkMatch professional dating client
//!
//! This library provides the candidate deck state machine used by the
//! LinkMatch client: normalization of heterogeneous backend payloads into
//! uniform candidates, a cursor-based deck with an in-transition lock, and
//! fire-and-forget decision dispatch to the matching backend.

pub mod config;
pub mod core;
pub mod models;
pub mod services;
pub mod session;

// Re-export commonly used types
pub use core::{
    fallback_candidates, normalize, DeckEngine, DeckError, DeckPhase, DeckSnapshot,
    DecisionDispatcher, DecisionOutcome, SettleOutcome, VISIBLE_WINDOW,
};
pub use models::{Candidate, DecisionEvent, SwipeDirection};
pub use session::{DeckLoad, SwipeSession};
