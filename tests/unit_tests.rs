// Unit tests for the LinkMatch deck engine

use linkmatch::core::{
    fallback_candidates, normalize, DeckEngine, DeckError, DeckPhase, SettleOutcome,
};
use linkmatch::models::{Candidate, SwipeDirection};
use serde_json::{json, Value};

fn test_candidate(id: &str, name: &str) -> Candidate {
    serde_json::from_value(json!({ "profile_id": id, "name": name }))
        .expect("candidate from minimal profile")
}

fn test_deck(n: usize) -> Vec<Candidate> {
    (0..n)
        .map(|i| test_candidate(&format!("p{}", i), &format!("Candidate {}", i)))
        .collect()
}

// --- Normalization ---

#[test]
fn test_normalize_rejects_unstructured_payloads() {
    assert!(normalize(&Value::Null).is_empty());
    assert!(normalize(&json!("just a string")).is_empty());
    assert!(normalize(&json!(42)).is_empty());
    assert!(normalize(&json!([])).is_empty());
    assert!(normalize(&json!({})).is_empty());
    assert!(normalize(&json!({ "profiles": "not-an-array" })).is_empty());
    assert!(normalize(&json!({ "matches": "not-an-array" })).is_empty());
    assert!(normalize(&json!({ "something": [1, 2, 3] })).is_empty());
}

#[test]
fn test_normalize_is_idempotent_on_normalized_input() {
    let original = fallback_candidates();
    let payload = json!({ "profiles": original });

    let first = normalize(&payload);
    assert_eq!(first, original);

    let second = normalize(&json!({ "profiles": first }));
    assert_eq!(second, original);
}

#[test]
fn test_normalize_flat_profile_list() {
    let payload = json!({
        "profiles": [
            { "profile_id": "p1", "name": "A", "age": 30 },
            { "profile_id": "p2", "name": "B" },
        ]
    });

    let candidates = normalize(&payload);
    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].profile_id, "p1");
    assert_eq!(candidates[0].age, Some(30));
    assert_eq!(candidates[0].compatibility_score, None);
    assert_eq!(candidates[1].name, "B");
    assert!(candidates[1].reasons.is_empty());
}

#[test]
fn test_normalize_drops_unparseable_elements() {
    let payload = json!({
        "profiles": [
            null,
            { "name": "missing identifier" },
            "not an object",
            { "profile_id": "p1", "name": "Kept" },
        ]
    });

    let candidates = normalize(&payload);
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].profile_id, "p1");
}

#[test]
fn test_normalize_ranked_wrapper() {
    // Property 8 of the deck contract: the wrapped shape flattens into one
    // uniform candidate carrying the ranking metadata
    let payload = json!({
        "matches": [
            {
                "profile": { "profile_id": "p1", "name": "A" },
                "compatibility_score": 90,
                "match_type": "X",
                "reasons": ["r1"],
            }
        ]
    });

    let candidates = normalize(&payload);
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].profile_id, "p1");
    assert_eq!(candidates[0].name, "A");
    assert_eq!(candidates[0].compatibility_score, Some(90.0));
    assert_eq!(candidates[0].match_type, Some("X".to_string()));
    assert_eq!(candidates[0].reasons, vec!["r1".to_string()]);
}

#[test]
fn test_normalize_wrapper_metadata_wins_over_nested_profile() {
    let payload = json!({
        "matches": [
            {
                "profile": {
                    "profile_id": "p1",
                    "compatibilityScore": 10,
                    "matchType": "stale",
                    "reasons": ["old"],
                },
                "compatibility_score": 90,
                "match_type": "fresh",
                "reasons": ["new"],
            }
        ]
    });

    let candidates = normalize(&payload);
    assert_eq!(candidates[0].compatibility_score, Some(90.0));
    assert_eq!(candidates[0].match_type, Some("fresh".to_string()));
    assert_eq!(candidates[0].reasons, vec!["new".to_string()]);
}

#[test]
fn test_normalize_wrapper_falls_back_to_nested_profile_fields() {
    let payload = json!({
        "matches": [
            {
                "profile": {
                    "profile_id": "p1",
                    "compatibilityScore": 55,
                    "matchType": "Industry Match",
                },
            }
        ]
    });

    let candidates = normalize(&payload);
    assert_eq!(candidates[0].compatibility_score, Some(55.0));
    assert_eq!(candidates[0].match_type, Some("Industry Match".to_string()));
}

#[test]
fn test_normalize_mixed_match_list() {
    // Flat records and wrapped records can appear in the same list
    let payload = json!({
        "matches": [
            { "profile": { "profile_id": "wrapped" }, "compatibility_score": 80 },
            { "profile_id": "flat", "name": "Flat" },
        ]
    });

    let candidates = normalize(&payload);
    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].profile_id, "wrapped");
    assert_eq!(candidates[0].compatibility_score, Some(80.0));
    assert_eq!(candidates[1].profile_id, "flat");
    assert_eq!(candidates[1].compatibility_score, None);
}

#[test]
fn test_normalize_prefers_matches_over_profiles() {
    let payload = json!({
        "matches": [{ "profile_id": "from-matches" }],
        "profiles": [{ "profile_id": "from-profiles" }],
    });

    let candidates = normalize(&payload);
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].profile_id, "from-matches");
}

#[test]
fn test_fallback_deck_is_fixed() {
    let fallback = fallback_candidates();
    assert_eq!(fallback.len(), 3);
    assert_eq!(fallback[0].profile_id, "fallback-1");
    assert_eq!(fallback[1].name, "Jordan Lee");
    assert_eq!(fallback[2].compatibility_score, Some(92.0));
    // Deterministic across calls
    assert_eq!(fallback, fallback_candidates());
}

// --- Deck engine ---

#[tokio::test]
async fn test_load_resets_cursor_and_window() {
    let deck = DeckEngine::new();

    assert_eq!(deck.snapshot().await.phase, DeckPhase::Loading);

    deck.load(test_deck(5)).await;
    let snapshot = deck.snapshot().await;
    assert_eq!(snapshot.phase, DeckPhase::Ready);
    assert_eq!(snapshot.position, 0);
    assert!(!snapshot.in_transition);
    assert_eq!(snapshot.pending_direction, None);
    assert_eq!(deck.visible_window().await.len(), 3);
    assert_eq!(
        deck.active_candidate().await.map(|c| c.profile_id),
        Some("p0".to_string())
    );

    deck.load(test_deck(2)).await;
    assert_eq!(deck.snapshot().await.position, 0);
    assert_eq!(deck.visible_window().await.len(), 2);

    deck.load(test_deck(0)).await;
    assert_eq!(deck.snapshot().await.phase, DeckPhase::Exhausted);
    assert!(deck.visible_window().await.is_empty());
    assert_eq!(deck.active_candidate().await, None);
}

#[tokio::test]
async fn test_window_truncates_at_end_of_deck() {
    let deck = DeckEngine::new();
    deck.load(test_deck(4)).await;

    // Advance to position 2; the window shrinks to the tail
    for _ in 0..2 {
        let active = deck.begin_decision(SwipeDirection::Left).await.unwrap();
        deck.settle(active.epoch).await;
    }

    let window = deck.visible_window().await;
    assert_eq!(window.len(), 2);
    assert_eq!(window[0].profile_id, "p2");
    assert_eq!(window[1].profile_id, "p3");
}

#[tokio::test]
async fn test_second_decision_rejected_while_in_transition() {
    let deck = DeckEngine::new();
    deck.load(test_deck(3)).await;

    let first = deck.begin_decision(SwipeDirection::Right).await;
    assert!(first.is_ok());

    let second = deck.begin_decision(SwipeDirection::Left).await;
    assert_eq!(second.unwrap_err(), DeckError::DecisionInFlight);

    // Settling releases the lock and a new decision can begin
    deck.settle(first.unwrap().epoch).await;
    assert!(deck.begin_decision(SwipeDirection::Left).await.is_ok());
}

#[tokio::test]
async fn test_begin_decision_on_exhausted_deck_fails() {
    let deck = DeckEngine::new();
    deck.load(test_deck(0)).await;

    let result = deck.begin_decision(SwipeDirection::Right).await;
    assert_eq!(result.unwrap_err(), DeckError::NoActiveCandidate);
}

#[tokio::test]
async fn test_settle_advances_and_empties_exactly_once() {
    let deck = DeckEngine::new();
    deck.load(test_deck(2)).await;

    let active = deck.begin_decision(SwipeDirection::Right).await.unwrap();
    assert_eq!(active.candidate.profile_id, "p0");
    assert_eq!(
        deck.settle(active.epoch).await,
        SettleOutcome::Advanced { position: 1 }
    );

    let active = deck.begin_decision(SwipeDirection::Left).await.unwrap();
    assert_eq!(active.candidate.profile_id, "p1");
    assert_eq!(deck.settle(active.epoch).await, SettleOutcome::DeckEmpty);
    assert_eq!(deck.snapshot().await.phase, DeckPhase::Exhausted);

    // No further decisions, so the empty notification cannot fire again
    assert_eq!(
        deck.begin_decision(SwipeDirection::Right).await.unwrap_err(),
        DeckError::NoActiveCandidate
    );
    assert_eq!(deck.settle(active.epoch).await, SettleOutcome::Stale);
}

#[tokio::test]
async fn test_settle_without_pending_decision_is_ignored() {
    let deck = DeckEngine::new();
    let epoch = deck.load(test_deck(3)).await;

    assert_eq!(deck.settle(epoch).await, SettleOutcome::Stale);
    assert_eq!(deck.snapshot().await.position, 0);
}

#[tokio::test]
async fn test_stale_settle_cannot_corrupt_a_reloaded_deck() {
    let deck = DeckEngine::new();
    deck.load(test_deck(3)).await;

    let active = deck.begin_decision(SwipeDirection::Right).await.unwrap();

    // Deck is replaced while the decision is still animating
    let new_epoch = deck.load(test_deck(5)).await;
    assert_ne!(active.epoch, new_epoch);

    assert_eq!(deck.settle(active.epoch).await, SettleOutcome::Stale);
    let snapshot = deck.snapshot().await;
    assert_eq!(snapshot.position, 0);
    assert!(!snapshot.in_transition);
    assert_eq!(snapshot.deck_len, 5);
}

#[tokio::test]
async fn test_snapshot_channel_tracks_transitions() {
    let deck = DeckEngine::new();
    let mut changes = deck.subscribe();

    deck.load(test_deck(1)).await;
    changes.changed().await.unwrap();
    assert_eq!(changes.borrow().phase, DeckPhase::Ready);

    let active = deck.begin_decision(SwipeDirection::Right).await.unwrap();
    changes.changed().await.unwrap();
    {
        let snapshot = changes.borrow();
        assert!(snapshot.in_transition);
        assert_eq!(snapshot.pending_direction, Some(SwipeDirection::Right));
    }

    deck.settle(active.epoch).await;
    changes.changed().await.unwrap();
    {
        let snapshot = changes.borrow();
        assert!(!snapshot.in_transition);
        assert_eq!(snapshot.phase, DeckPhase::Exhausted);
    }
}
