//! Domain Progression
//!
//! Converts raw experience into domain growth along a diminishing-returns
//! curve: `delta = xp / (base_cost * (1 + value * decay))`.

use civ_events::{Domain, DomainValues};
use serde::{Deserialize, Serialize};

/// Diminishing-returns growth curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionCurve {
    /// Experience needed for one point at value zero
    pub base_cost: f64,
    /// How quickly cost rises with the current value
    pub decay: f64,
}

impl Default for ProgressionCurve {
    fn default() -> Self {
        Self {
            base_cost: 2.0,
            decay: 0.05,
        }
    }
}

impl ProgressionCurve {
    /// Growth produced by `xp` at the current `value`.
    ///
    /// Negative experience shrinks the value through the same divisor, so
    /// losses also diminish as the value grows.
    pub fn delta(&self, value: f64, xp: f64) -> f64 {
        xp / (self.base_cost * (1.0 + value * self.decay))
    }

    /// Applies one turn of experience to every domain, in canonical order.
    pub fn apply(&self, domains: &mut DomainValues, xp: &DomainValues) {
        for domain in Domain::ALL {
            let current = domains[domain];
            domains[domain] = current + self.delta(current, xp[domain]);
        }
    }
}
