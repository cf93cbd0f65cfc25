//! World Event Catalog
//!
//! Random events that may strike during a turn. Multipliers scale the turn's
//! experience before growth; deltas are added to domain values after it.

use civ_events::Domain;

use crate::error::CivError;

/// An immutable world event
#[derive(Debug, PartialEq)]
pub struct EventDefinition {
    pub name: &'static str,
    /// Flat domain deltas, applied after growth
    pub domain_deltas: &'static [(Domain, f64)],
    /// Experience multipliers, applied before growth. Unlisted domains use 1.0.
    pub xp_multipliers: &'static [(Domain, f64)],
}

impl EventDefinition {
    /// Experience multiplier for a domain.
    pub fn multiplier(&self, domain: Domain) -> f64 {
        self.xp_multipliers
            .iter()
            .find(|(d, _)| *d == domain)
            .map(|(_, m)| *m)
            .unwrap_or(1.0)
    }

    /// Flat delta for a domain, zero when unlisted.
    pub fn delta(&self, domain: Domain) -> f64 {
        self.domain_deltas
            .iter()
            .find(|(d, _)| *d == domain)
            .map(|(_, v)| *v)
            .unwrap_or(0.0)
    }

    /// Looks up a catalog event by name (case-insensitive).
    pub fn by_name(name: &str) -> Result<&'static EventDefinition, CivError> {
        EVENT_CATALOG
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| CivError::UnknownEvent(name.to_string()))
    }
}

/// Catalog order. Random picks index into this array.
pub static EVENT_CATALOG: [EventDefinition; 3] = [
    EventDefinition {
        name: "Drought",
        domain_deltas: &[(Domain::Survival, -0.45), (Domain::Social, -0.15)],
        xp_multipliers: &[(Domain::Survival, 0.9)],
    },
    EventDefinition {
        name: "Flood",
        domain_deltas: &[(Domain::Survival, 0.3), (Domain::Production, -0.15)],
        xp_multipliers: &[(Domain::Production, 0.93)],
    },
    EventDefinition {
        name: "Plague",
        domain_deltas: &[(Domain::Social, -0.45), (Domain::Expression, -0.15)],
        xp_multipliers: &[(Domain::Exploration, 0.9)],
    },
];
