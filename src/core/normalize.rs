use crate::models::Candidate;
use serde::Deserialize;
use serde_json::Value;

/// A ranked match wrapper: a nested profile plus ranking metadata
#[derive(Debug, Deserialize)]
struct RankedMatch {
    profile: Candidate,
    #[serde(default)]
    compatibility_score: Option<f64>,
    #[serde(default)]
    match_type: Option<String>,
    #[serde(default)]
    reasons: Option<Vec<String>>,
}

/// One element of a candidate payload
///
/// Backends return either wrapped matches or flat profile records, sometimes
/// mixed within one list. Tried in order: the wrapped shape requires a
/// `profile` field, so flat records fall through to the second variant.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DeckEntry {
    Ranked(RankedMatch),
    Flat(Candidate),
}

impl DeckEntry {
    fn into_candidate(self) -> Candidate {
        match self {
            DeckEntry::Ranked(ranked) => {
                let mut candidate = ranked.profile;
                // Ranking metadata on the wrapper wins over any same-named
                // fields on the nested profile
                candidate.compatibility_score =
                    ranked.compatibility_score.or(candidate.compatibility_score);
                candidate.match_type = ranked.match_type.or(candidate.match_type);
                if let Some(reasons) = ranked.reasons {
                    candidate.reasons = reasons;
                }
                candidate
            }
            DeckEntry::Flat(candidate) => candidate,
        }
    }
}

/// Normalize a raw backend payload into an ordered candidate sequence
///
/// Accepts the three shapes the backend is known to return: a ranked match
/// list (`{ matches: [...] }`, elements wrapped or flat), a plain profile
/// list (`{ profiles: [...] }`), or anything else, which yields an empty
/// sequence. Elements that fail to parse are dropped. Pure and
/// deterministic; never errors.
pub fn normalize(payload: &Value) -> Vec<Candidate> {
    let Some(object) = payload.as_object() else {
        return Vec::new();
    };

    if let Some(matches) = object.get("matches").and_then(Value::as_array) {
        return matches.iter().filter_map(normalize_entry).collect();
    }

    if let Some(profiles) = object.get("profiles").and_then(Value::as_array) {
        return profiles.iter().filter_map(normalize_entry).collect();
    }

    Vec::new()
}

fn normalize_entry(value: &Value) -> Option<Candidate> {
    let entry: DeckEntry = serde_json::from_value(value.clone()).ok()?;
    Some(entry.into_candidate())
}
