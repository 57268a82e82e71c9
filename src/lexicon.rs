// src/lexicon.rs
//! Static keyword dictionaries for the three preference axes.
//!
//! The tables live in `keyword_lexicon.json`, embedded at compile time and
//! parsed once. Keywords are stored pre-normalized (lower-case, no
//! diacritics), so matching never folds the lexicon side. There is no
//! mutation path; the tables are process-wide constants.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;

use crate::preferences::{Energy, Environment, Plan};

static LEXICON: Lazy<KeywordLexicon> = Lazy::new(|| {
    let raw = include_str!("../keyword_lexicon.json");
    serde_json::from_str::<KeywordLexicon>(raw).expect("valid keyword lexicon")
});

#[derive(Debug, Deserialize)]
struct KeywordLexicon {
    energy: HashMap<String, Vec<String>>,
    environment: HashMap<String, Vec<String>>,
    plan: HashMap<String, Vec<String>>,
}

fn lookup(table: &'static HashMap<String, Vec<String>>, key: &str) -> &'static [String] {
    table.get(key).map(Vec::as_slice).unwrap_or(&[])
}

/// Keywords for the selected energy level.
pub fn energy_keywords(value: Energy) -> &'static [String] {
    lookup(&LEXICON.energy, value.as_str())
}

/// Keywords for the selected environment. `balanced` is the empty list.
pub fn environment_keywords(value: Environment) -> &'static [String] {
    lookup(&LEXICON.environment, value.as_str())
}

/// Keywords for the selected plan.
pub fn plan_keywords(value: Plan) -> &'static [String] {
    lookup(&LEXICON.plan, value.as_str())
}
