//! Action Catalog
//!
//! The seven actions a civilization can take each turn and the raw
//! experience each contributes.

use civ_events::Domain;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CivError;

/// A turn action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Hunt,
    Farm,
    Raid,
    Trade,
    Ritual,
    Explore,
    Infrastructure,
}

const HUNT_XP: &[(Domain, f64)] = &[(Domain::Survival, 1.0), (Domain::Warfare, 0.5)];
const FARM_XP: &[(Domain, f64)] = &[(Domain::Survival, 2.0), (Domain::Production, 1.0)];
const RAID_XP: &[(Domain, f64)] = &[
    (Domain::Warfare, 2.0),
    (Domain::Production, 1.0),
    (Domain::Social, -0.5),
];
const TRADE_XP: &[(Domain, f64)] = &[
    (Domain::Exploration, 1.0),
    (Domain::Social, 1.0),
    (Domain::Production, 0.5),
];
const RITUAL_XP: &[(Domain, f64)] = &[(Domain::Expression, 1.5), (Domain::Social, 0.5)];
const EXPLORE_XP: &[(Domain, f64)] = &[(Domain::Exploration, 1.5), (Domain::Survival, 0.5)];
const INFRASTRUCTURE_XP: &[(Domain, f64)] = &[(Domain::Production, 1.5), (Domain::Social, 0.5)];

impl Action {
    /// Catalog order. Random picks index into this array.
    pub const ALL: [Action; 7] = [
        Action::Hunt,
        Action::Farm,
        Action::Raid,
        Action::Trade,
        Action::Ritual,
        Action::Explore,
        Action::Infrastructure,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Hunt => "hunt",
            Action::Farm => "farm",
            Action::Raid => "raid",
            Action::Trade => "trade",
            Action::Ritual => "ritual",
            Action::Explore => "explore",
            Action::Infrastructure => "infrastructure",
        }
    }

    /// Raw experience contributed per domain.
    pub fn experience(&self) -> &'static [(Domain, f64)] {
        match self {
            Action::Hunt => HUNT_XP,
            Action::Farm => FARM_XP,
            Action::Raid => RAID_XP,
            Action::Trade => TRADE_XP,
            Action::Ritual => RITUAL_XP,
            Action::Explore => EXPLORE_XP,
            Action::Infrastructure => INFRASTRUCTURE_XP,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = CivError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| CivError::UnknownAction(s.to_string()))
    }
}
