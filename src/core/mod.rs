// Core engine exports
pub mod deck;
pub mod dispatch;
pub mod fallback;
pub mod normalize;

pub use deck::{
    ActiveDecision, DeckEngine, DeckError, DeckPhase, DeckSnapshot, SettleOutcome, VISIBLE_WINDOW,
};
pub use dispatch::{DecisionDispatcher, DecisionOutcome};
pub use fallback::fallback_candidates;
pub use normalize::normalize;
