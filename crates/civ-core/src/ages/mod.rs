//! Procedural Ages
//!
//! When a domain reaches a major tier, signals are extracted from the
//! civilization, turned into a name and a set of effects, and recorded as an
//! [`AgeRecord`]. Two independent trigger families exist:
//!
//! - the age gate, keyed per tier (`age_gate_{Domain}_{tier}`)
//! - the first crossing, keyed once per domain (`age_{Domain}_15`)
//!
//! In [`AgeTriggerMode::Legacy`] both fire on a domain's first 15-point
//! crossing, producing two records. [`AgeTriggerMode::Single`] disables the
//! first-crossing family.

pub mod effects;
pub mod naming;
pub mod signals;

pub use effects::build_effects;
pub use naming::{build_name, DEFAULT_BIOME, NAME_TEMPLATES};
pub use signals::{crossing_signals, gate_signals};

use civ_events::{
    AgeFamily, AgeRecord, ChronicleEvent, Civilization, Domain, EffectKey, Signal,
};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::systems::milestones::{age_gate_key, crossing_key, tier};

/// Which Age trigger families are active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AgeTriggerMode {
    /// Age gate and first crossing both fire (two records on the first crossing)
    #[default]
    Legacy,
    /// Only the age gate fires
    Single,
}

/// Age generation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgeRules {
    pub mode: AgeTriggerMode,
    /// Biome word offered to the namer; empty disables it
    pub biome_hint: String,
    /// NI at or above which a unity signal is added
    pub unity_threshold: f64,
    /// Domain value below which no gate signal is emitted
    pub signal_floor: f64,
    /// Points above the floor per unit of signal weight
    pub signal_scale: f64,
}

impl Default for AgeRules {
    fn default() -> Self {
        Self {
            mode: AgeTriggerMode::Legacy,
            biome_hint: "River".to_string(),
            unity_threshold: 9.0,
            signal_floor: 10.0,
            signal_scale: 10.0,
        }
    }
}

impl AgeRules {
    pub fn biome(&self) -> Option<&str> {
        Some(self.biome_hint.as_str()).filter(|h| !h.is_empty())
    }
}

/// Runs the naming and effects pipeline and builds a record with the next
/// sequential ID. Does not append it.
pub fn generate_age<R: Rng + ?Sized>(
    rng: &mut R,
    civ: &Civilization,
    signals: &[Signal],
    biome_hint: Option<&str>,
    turn: u32,
) -> AgeRecord {
    let name = build_name(rng, signals, biome_hint);
    let effects = build_effects(signals);
    let causes = signals.iter().map(|s| (s.kind, s.weight)).collect();

    AgeRecord {
        id: civ.next_age_id(),
        name,
        causes,
        effects,
        started_turn: turn,
        ends_turn: None,
    }
}

/// Tiered age gate. Fires once per (domain, tier) whenever a domain sits at
/// tier one or higher, then nudges Social and Expression from the new Age's
/// stability and diplomacy effects.
pub fn check_age_gates<R: Rng + ?Sized>(
    civ: &mut Civilization,
    rng: &mut R,
    rules: &AgeRules,
    step: f64,
    turn: u32,
) -> Vec<ChronicleEvent> {
    let mut fired = Vec::new();

    for domain in Domain::ALL {
        let bucket = tier(civ.domains[domain], step);
        if bucket < 1 || !civ.unlock(age_gate_key(domain, bucket)) {
            continue;
        }

        let signals = gate_signals(civ, rules);
        let record = generate_age(rng, civ, &signals, rules.biome(), turn);

        if let Some(stability) = record.effect(EffectKey::Stability) {
            civ.domains[Domain::Social] += 0.1 * stability;
        }
        if let Some(diplomacy) = record.effect(EffectKey::Diplomacy) {
            civ.domains[Domain::Expression] += 0.1 * diplomacy;
        }

        let threshold = bucket as f64 * step;
        tracing::info!("Age began: {} (from {} >= {})", record.name, domain, threshold);
        fired.push(ChronicleEvent::AgeBegan {
            turn,
            age_id: record.id.clone(),
            name: record.name.clone(),
            domain,
            family: AgeFamily::Gate,
            threshold,
        });
        civ.record_age(record);
    }

    fired
}

/// First-crossing trigger. Fires once per domain for the whole run, the
/// first time its value reaches `step`. Inactive in single mode.
pub fn check_first_crossings<R: Rng + ?Sized>(
    civ: &mut Civilization,
    rng: &mut R,
    rules: &AgeRules,
    step: f64,
    turn: u32,
) -> Vec<ChronicleEvent> {
    if rules.mode == AgeTriggerMode::Single {
        return Vec::new();
    }

    let mut fired = Vec::new();

    for domain in Domain::ALL {
        if civ.domains[domain] < step || !civ.unlock(crossing_key(domain, step)) {
            continue;
        }

        let signals = crossing_signals(domain, civ, rules);
        let record = generate_age(rng, civ, &signals, rules.biome(), turn);

        tracing::info!("Age began: {} (triggered by {})", record.name, domain);
        fired.push(ChronicleEvent::AgeBegan {
            turn,
            age_id: record.id.clone(),
            name: record.name.clone(),
            domain,
            family: AgeFamily::Crossing,
            threshold: step,
        });
        civ.record_age(record);
    }

    fired
}
