//! Civilization State
//!
//! The single civilization a run simulates. Owned exclusively by the turn
//! orchestrator for the lifetime of a run.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::age::{generate_age_id, AgeRecord};
use crate::domain::{Domain, DomainValues};

pub const DEFAULT_CIV_NAME: &str = "Demo Tribe";

/// Lower bound of national identity
pub const NI_MIN: f64 = 0.0;
/// Upper bound of national identity
pub const NI_MAX: f64 = 10.0;

/// Complete civilization state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Civilization {
    pub name: String,
    pub domains: DomainValues,
    /// One-shot milestone flags
    pub capabilities: BTreeSet<String>,
    /// National identity, kept within `[NI_MIN, NI_MAX]`
    pub ni: f64,
    pub age_history: Vec<AgeRecord>,
}

impl Civilization {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            domains: DomainValues::default(),
            capabilities: BTreeSet::new(),
            ni: 5.0,
            age_history: Vec::new(),
        }
    }

    /// Creates a civilization with every domain at `starting_value`.
    pub fn with_starting_values(
        name: impl Into<String>,
        starting_value: f64,
        starting_ni: f64,
    ) -> Self {
        Self {
            domains: DomainValues::uniform(starting_value),
            ni: starting_ni.clamp(NI_MIN, NI_MAX),
            ..Self::new(name)
        }
    }

    pub fn domain(&self, domain: Domain) -> f64 {
        self.domains[domain]
    }

    pub fn has_capability(&self, key: &str) -> bool {
        self.capabilities.contains(key)
    }

    /// Records a capability flag. Returns `false` if it was already present.
    pub fn unlock(&mut self, key: impl Into<String>) -> bool {
        self.capabilities.insert(key.into())
    }

    /// ID the next appended Age will receive.
    pub fn next_age_id(&self) -> String {
        generate_age_id(self.age_history.len() + 1)
    }

    pub fn record_age(&mut self, record: AgeRecord) {
        self.age_history.push(record);
    }

    pub fn latest_age(&self) -> Option<&AgeRecord> {
        self.age_history.last()
    }
}

impl Default for Civilization {
    fn default() -> Self {
        Self::new(DEFAULT_CIV_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_default_civilization() {
        let civ = Civilization::default();

        assert_eq!(civ.name, "Demo Tribe");
        assert_eq!(civ.ni, 5.0);
        for (_, value) in civ.domains.iter() {
            assert_eq!(value, 5.0);
        }
        assert!(civ.capabilities.is_empty());
        assert!(civ.age_history.is_empty());
    }

    #[test]
    fn test_unlock_is_one_shot() {
        let mut civ = Civilization::default();

        assert!(civ.unlock("minor_Survival_2"));
        assert!(!civ.unlock("minor_Survival_2"));
        assert!(civ.has_capability("minor_Survival_2"));
        assert_eq!(civ.capabilities.len(), 1);
    }

    #[test]
    fn test_starting_ni_is_clamped() {
        let civ = Civilization::with_starting_values("Test", 3.0, 42.0);
        assert_eq!(civ.ni, NI_MAX);
        assert_eq!(civ.domain(Domain::Warfare), 3.0);
    }

    #[test]
    fn test_age_ids_follow_history_length() {
        let mut civ = Civilization::default();
        assert_eq!(civ.next_age_id(), "age_001");

        civ.record_age(AgeRecord {
            id: civ.next_age_id(),
            name: "Era of Laws".to_string(),
            causes: BTreeMap::new(),
            effects: BTreeMap::new(),
            started_turn: 1,
            ends_turn: None,
        });

        assert_eq!(civ.next_age_id(), "age_002");
        assert_eq!(civ.latest_age().map(|a| a.id.as_str()), Some("age_001"));
    }
}
