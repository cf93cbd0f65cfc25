//! Signal Extraction
//!
//! Derives weighted signals from civilization state for the two Age trigger
//! contexts.

use civ_events::{Civilization, Domain, Signal, SignalKind};

use super::AgeRules;

/// Signals for the tiered age gate: every domain above the floor, weighted
/// by how far above it sits, plus unity when NI is high.
pub fn gate_signals(civ: &Civilization, rules: &AgeRules) -> Vec<Signal> {
    let mut signals: Vec<Signal> = civ
        .domains
        .iter()
        .map(|(domain, value)| {
            let weight = ((value - rules.signal_floor) / rules.signal_scale).max(0.0);
            Signal::new(domain, weight)
        })
        .filter(|s| s.weight > 0.0)
        .collect();

    signals.extend(unity_signal(civ, rules));
    signals
}

/// Signals for the first-crossing trigger: the crossing domain alone, plus
/// unity when NI is high.
pub fn crossing_signals(domain: Domain, civ: &Civilization, rules: &AgeRules) -> Vec<Signal> {
    let mut signals = vec![Signal::new(domain, 1.0)];
    signals.extend(unity_signal(civ, rules));
    signals
}

fn unity_signal(civ: &Civilization, rules: &AgeRules) -> Option<Signal> {
    (civ.ni >= rules.unity_threshold).then(|| Signal::new(SignalKind::Unity, 1.0))
}
