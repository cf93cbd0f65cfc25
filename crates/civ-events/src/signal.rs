//! Signal and Effect Types
//!
//! Signals are weighted qualitative tags derived from civilization state.
//! They drive Age naming and the numeric effects an Age grants.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::{Domain, ParseError};

/// Qualitative flavour carried by a signal.
///
/// One per domain, plus the two synthetic kinds `crisis` and `unity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    Survival,
    Production,
    Warfare,
    Exploration,
    Social,
    Expression,
    Crisis,
    Unity,
}

impl SignalKind {
    /// All signal kinds, domains first.
    pub const ALL: [SignalKind; 8] = [
        SignalKind::Survival,
        SignalKind::Production,
        SignalKind::Warfare,
        SignalKind::Exploration,
        SignalKind::Social,
        SignalKind::Expression,
        SignalKind::Crisis,
        SignalKind::Unity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SignalKind::Survival => "survival",
            SignalKind::Production => "production",
            SignalKind::Warfare => "warfare",
            SignalKind::Exploration => "exploration",
            SignalKind::Social => "social",
            SignalKind::Expression => "expression",
            SignalKind::Crisis => "crisis",
            SignalKind::Unity => "unity",
        }
    }
}

impl From<Domain> for SignalKind {
    fn from(domain: Domain) -> Self {
        match domain {
            Domain::Survival => SignalKind::Survival,
            Domain::Production => SignalKind::Production,
            Domain::Warfare => SignalKind::Warfare,
            Domain::Exploration => SignalKind::Exploration,
            Domain::Social => SignalKind::Social,
            Domain::Expression => SignalKind::Expression,
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignalKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SignalKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ParseError::UnknownSignal(s.to_string()))
    }
}

/// A weighted signal. Weight is non-negative; zero weights are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub kind: SignalKind,
    pub weight: f64,
}

impl Signal {
    pub fn new(kind: impl Into<SignalKind>, weight: f64) -> Self {
        Self {
            kind: kind.into(),
            weight,
        }
    }
}

/// Gameplay effect granted by an Age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKey {
    FoodYield,
    BuildSpeed,
    Combat,
    Trade,
    Stability,
    Diplomacy,
    Resilience,
    NiCap,
}

impl EffectKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EffectKey::FoodYield => "food_yield",
            EffectKey::BuildSpeed => "build_speed",
            EffectKey::Combat => "combat",
            EffectKey::Trade => "trade",
            EffectKey::Stability => "stability",
            EffectKey::Diplomacy => "diplomacy",
            EffectKey::Resilience => "resilience",
            EffectKey::NiCap => "ni_cap",
        }
    }
}

impl fmt::Display for EffectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
