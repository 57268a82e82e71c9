//! # Recommendation Engine
//! Pure, testable logic that maps `(events, preferences, now)` → best event.
//! No I/O, no clock reads, suitable for unit tests and offline evaluation.
//!
//! Policy: when any candidate scores above zero, score decides and recency
//! breaks ties; when nothing scores, fall back to "what's happening soonest".
//! Recency order is upcoming-soonest first, then past events (most recent
//! first), then events whose catalog date could not be parsed.

use chrono::{Local, NaiveDateTime};
use serde::Serialize;

use crate::event::Event;
use crate::normalize::normalize;
use crate::preferences::Preferences;
use crate::scoring::{preference_score, proximity_bonus};

/// One ranked candidate with its score breakdown, for explainability.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEvent<'a> {
    pub event: &'a Event,
    /// Weighted keyword score plus proximity bonus.
    pub score: i32,
    /// Keywords that contributed (sorted, deduped).
    pub matched: Vec<String>,
    /// Parsed start timestamp; `None` when the catalog data was malformed.
    pub when: Option<NaiveDateTime>,
}

/// Sort key for "soonest upcoming first": upcoming events ordered by how
/// soon they start, then past events by how recently they happened, then
/// events with no parseable timestamp (input order preserved among those).
fn recency_rank(when: Option<NaiveDateTime>, now: NaiveDateTime) -> (u8, i64) {
    match when {
        Some(w) if w >= now => (0, w.signed_duration_since(now).num_seconds()),
        Some(w) => (1, now.signed_duration_since(w).num_seconds()),
        None => (2, 0),
    }
}

/// Score and order the full candidate list. Input order is never mutated;
/// the result borrows the events it ranks.
pub fn rank<'a>(events: &'a [Event], prefs: &Preferences, now: NaiveDateTime) -> Vec<RankedEvent<'a>> {
    let mut ranked: Vec<RankedEvent<'a>> = events
        .iter()
        .map(|event| {
            let text = normalize(&event.combined_text());
            let (kw_score, matched) = preference_score(&text, prefs);
            let when = event.start_timestamp();
            RankedEvent {
                event,
                score: kw_score + proximity_bonus(when, now),
                matched,
                when,
            }
        })
        .collect();

    let any_match = ranked.iter().any(|r| r.score > 0);
    if any_match {
        // Score decides; recency breaks ties. Stable sort keeps input order
        // for candidates that tie on both.
        ranked.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| recency_rank(a.when, now).cmp(&recency_rank(b.when, now)))
        });
    } else {
        // Nothing matched: pure "what's happening soonest" fallback.
        ranked.sort_by_key(|r| recency_rank(r.when, now));
    }
    ranked
}

/// Pick the single best-matching event, or `None` for an empty list.
///
/// Never fails: malformed dates and zero keyword matches are ordinary
/// inputs, and a non-empty list always yields one of its own members.
pub fn recommend<'a>(
    events: &'a [Event],
    prefs: &Preferences,
    now: NaiveDateTime,
) -> Option<&'a Event> {
    rank(events, prefs, now).into_iter().next().map(|r| r.event)
}

/// Production wrapper: same decision with `now` read from the wall clock.
/// Tests should inject `now` through [`recommend`] instead.
pub fn recommend_now<'a>(events: &'a [Event], prefs: &Preferences) -> Option<&'a Event> {
    recommend(events, prefs, Local::now().naive_local())
}
