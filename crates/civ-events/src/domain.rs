//! Domain Types
//!
//! The six competence axes a civilization progresses along, and a fixed-size
//! value table indexed by them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// Starting value for every domain of a fresh civilization
pub const DEFAULT_DOMAIN_VALUE: f64 = 5.0;

/// One of six orthogonal competence domains
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Survival,
    Production,
    Warfare,
    Exploration,
    Social,
    Expression,
}

impl Domain {
    /// All domains in canonical processing order.
    pub const ALL: [Domain; 6] = [
        Domain::Survival,
        Domain::Production,
        Domain::Warfare,
        Domain::Exploration,
        Domain::Social,
        Domain::Expression,
    ];

    /// Lowercase name, used as a signal kind and CSV column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Survival => "survival",
            Domain::Production => "production",
            Domain::Warfare => "warfare",
            Domain::Exploration => "exploration",
            Domain::Social => "social",
            Domain::Expression => "expression",
        }
    }

    /// Capitalised name, used in capability keys and display.
    pub fn title(&self) -> &'static str {
        match self {
            Domain::Survival => "Survival",
            Domain::Production => "Production",
            Domain::Warfare => "Warfare",
            Domain::Exploration => "Exploration",
            Domain::Social => "Social",
            Domain::Expression => "Expression",
        }
    }

    /// Short label for the console table.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Domain::Survival => "S",
            Domain::Production => "P",
            Domain::Warfare => "W",
            Domain::Exploration => "E",
            Domain::Social => "SO",
            Domain::Expression => "X",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Domain {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Domain::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::UnknownDomain(s.to_string()))
    }
}

/// Errors raised when a closed-set name fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid domain: {0}")]
    UnknownDomain(String),

    #[error("invalid signal kind: {0}")]
    UnknownSignal(String),
}

/// One real number per domain.
///
/// Used both for the civilization's domain values and for per-turn
/// experience totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainValues {
    pub survival: f64,
    pub production: f64,
    pub warfare: f64,
    pub exploration: f64,
    pub social: f64,
    pub expression: f64,
}

impl DomainValues {
    /// Every domain set to the same value.
    pub fn uniform(value: f64) -> Self {
        Self {
            survival: value,
            production: value,
            warfare: value,
            exploration: value,
            social: value,
            expression: value,
        }
    }

    /// All zeros (empty experience ledger).
    pub fn zero() -> Self {
        Self::uniform(0.0)
    }

    /// Iterates `(domain, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Domain, f64)> + '_ {
        Domain::ALL.into_iter().map(move |d| (d, self[d]))
    }
}

impl Default for DomainValues {
    fn default() -> Self {
        Self::uniform(DEFAULT_DOMAIN_VALUE)
    }
}

impl Index<Domain> for DomainValues {
    type Output = f64;

    fn index(&self, domain: Domain) -> &f64 {
        match domain {
            Domain::Survival => &self.survival,
            Domain::Production => &self.production,
            Domain::Warfare => &self.warfare,
            Domain::Exploration => &self.exploration,
            Domain::Social => &self.social,
            Domain::Expression => &self.expression,
        }
    }
}

impl IndexMut<Domain> for DomainValues {
    fn index_mut(&mut self, domain: Domain) -> &mut f64 {
        match domain {
            Domain::Survival => &mut self.survival,
            Domain::Production => &mut self.production,
            Domain::Warfare => &mut self.warfare,
            Domain::Exploration => &mut self.exploration,
            Domain::Social => &mut self.social,
            Domain::Expression => &mut self.expression,
        }
    }
}
