//! scoring.rs — Bodování kandidátů podle nálady uživatele.
//!
//! Skóre = vážený součet klíčových slov přes tři osy (energy, environment,
//! plan; "plan" má dvojnásobnou váhu) + bonus za blízkost konání.
//!
//! Pozn.: Čistě „business logika" bez I/O, bez side-effectů.

use chrono::NaiveDateTime;

use crate::lexicon;
use crate::preferences::Preferences;

/// Axis weights — the plan axis counts double.
pub const W_ENERGY: i32 = 1;
pub const W_ENVIRONMENT: i32 = 1;
pub const W_PLAN: i32 = 2;

/// Proximity bonus windows (upcoming events only; the larger bonus wins).
pub const NEAR_WINDOW_SECS: i64 = 24 * 3600;
pub const SOON_WINDOW_SECS: i64 = 3 * 24 * 3600;
pub const NEAR_BONUS: i32 = 2;
pub const SOON_BONUS: i32 = 1;

/// Collect the listed keywords present in `text` as substrings.
/// Each keyword contributes once, no matter how often it repeats.
fn keyword_hits<'a>(text: &str, keywords: &'a [String]) -> Vec<&'a str> {
    keywords
        .iter()
        .filter(|kw| text.contains(kw.as_str()))
        .map(String::as_str)
        .collect()
}

/// Weighted keyword score of one normalized event text for the given
/// answers, plus the matched keywords for explainability (sorted, deduped).
///
/// Score 0 is a normal value, not an error.
pub fn preference_score(normalized_text: &str, prefs: &Preferences) -> (i32, Vec<String>) {
    let energy_hits = keyword_hits(normalized_text, lexicon::energy_keywords(prefs.energy));
    let environment_hits = keyword_hits(
        normalized_text,
        lexicon::environment_keywords(prefs.environment),
    );
    let plan_hits = keyword_hits(normalized_text, lexicon::plan_keywords(prefs.plan));

    let score = W_ENERGY * energy_hits.len() as i32
        + W_ENVIRONMENT * environment_hits.len() as i32
        + W_PLAN * plan_hits.len() as i32;

    let mut matched: Vec<String> = energy_hits
        .into_iter()
        .chain(environment_hits)
        .chain(plan_hits)
        .map(str::to_string)
        .collect();
    matched.sort();
    matched.dedup();

    (score, matched)
}

/// Bonus for events starting soon: +2 within one day of `now`, +1 within
/// three days. Past events and events with no timestamp get nothing.
pub fn proximity_bonus(when: Option<NaiveDateTime>, now: NaiveDateTime) -> i32 {
    let Some(when) = when else { return 0 };
    if when < now {
        return 0;
    }
    let gap = when.signed_duration_since(now).num_seconds();
    if gap <= NEAR_WINDOW_SECS {
        NEAR_BONUS
    } else if gap <= SOON_WINDOW_SECS {
        SOON_BONUS
    } else {
        0
    }
}
