// src/preferences.rs
//! Mood questionnaire axes. Exactly one value per axis; `Balanced` is the
//! neutral environment and carries no keywords.

use serde::{Deserialize, Serialize};

/// Desired activity intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Energy {
    Low,
    Mid,
    High,
}

/// Desired ambient noise/setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Quiet,
    Balanced,
    Loud,
}

/// Desired activity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    Calm,
    Talk,
    Move,
}

impl Energy {
    pub fn as_str(self) -> &'static str {
        match self {
            Energy::Low => "low",
            Energy::Mid => "mid",
            Energy::High => "high",
        }
    }

    pub const ALL: [Energy; 3] = [Energy::Low, Energy::Mid, Energy::High];
}

impl Environment {
    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Quiet => "quiet",
            Environment::Balanced => "balanced",
            Environment::Loud => "loud",
        }
    }

    pub const ALL: [Environment; 3] = [
        Environment::Quiet,
        Environment::Balanced,
        Environment::Loud,
    ];
}

impl Plan {
    pub fn as_str(self) -> &'static str {
        match self {
            Plan::Calm => "calm",
            Plan::Talk => "talk",
            Plan::Move => "move",
        }
    }

    pub const ALL: [Plan; 3] = [Plan::Calm, Plan::Talk, Plan::Move];
}

/// One questionnaire answer set: a single value on each of the three axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub energy: Energy,
    pub environment: Environment,
    pub plan: Plan,
}

impl Preferences {
    pub fn new(energy: Energy, environment: Environment, plan: Plan) -> Self {
        Self {
            energy,
            environment,
            plan,
        }
    }
}
