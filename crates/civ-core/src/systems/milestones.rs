//! Milestone Tracker
//!
//! Detects domain tier crossings turn over turn and fires one-shot unlocks.
//! Every unlock is keyed in the civilization's capability set; a present key
//! blocks that exact (family, domain, tier) from firing again.

use civ_events::{ChronicleEvent, Civilization, Domain, DomainValues};
use serde::{Deserialize, Serialize};

/// Threshold steps and bonuses for the minor and major families.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MilestoneRules {
    pub minor_step: f64,
    pub minor_bonus: f64,
    /// Also the step of both Age trigger families
    pub major_step: f64,
    pub major_bonus: f64,
}

impl Default for MilestoneRules {
    fn default() -> Self {
        Self {
            minor_step: 5.0,
            minor_bonus: 0.1,
            major_step: 15.0,
            major_bonus: 0.5,
        }
    }
}

/// Bucket index of `value` for a threshold `step`. Unbounded in both directions.
pub fn tier(value: f64, step: f64) -> i64 {
    (value / step).floor() as i64
}

pub fn minor_key(domain: Domain, tier: i64) -> String {
    format!("minor_{}_{}", domain, tier)
}

pub fn major_key(domain: Domain, tier: i64) -> String {
    format!("major_{}_{}", domain, tier)
}

pub fn age_gate_key(domain: Domain, tier: i64) -> String {
    format!("age_gate_{}_{}", domain, tier)
}

/// Key of the single first-crossing Age trigger. The threshold is fixed, so
/// this can fire at most once per domain per run.
pub fn crossing_key(domain: Domain, step: f64) -> String {
    format!("age_{}_{}", domain, step as i64)
}

/// Checks minor and major crossings against the start-of-turn values.
///
/// Per domain the major family is checked first. Both families compare
/// buckets of the value as it stood before either bonus was applied.
pub fn apply_milestones(
    civ: &mut Civilization,
    prev: &DomainValues,
    rules: &MilestoneRules,
    turn: u32,
) -> Vec<ChronicleEvent> {
    let mut fired = Vec::new();

    for domain in Domain::ALL {
        let now = civ.domains[domain];
        let before = prev[domain];

        let major_now = tier(now, rules.major_step);
        if major_now > tier(before, rules.major_step) && civ.unlock(major_key(domain, major_now)) {
            civ.domains[domain] += rules.major_bonus;
            tracing::info!(
                "Major breakthrough in {} (>= {})",
                domain,
                major_now as f64 * rules.major_step
            );
            fired.push(ChronicleEvent::MajorBreakthrough {
                turn,
                domain,
                tier: major_now,
            });
        }

        let minor_now = tier(now, rules.minor_step);
        if minor_now > tier(before, rules.minor_step) && civ.unlock(minor_key(domain, minor_now)) {
            civ.domains[domain] += rules.minor_bonus;
            tracing::debug!("Minor perk unlocked in {} (+5 x{})", domain, minor_now);
            fired.push(ChronicleEvent::MinorPerk {
                turn,
                domain,
                tier: minor_now,
            });
        }
    }

    fired
}
