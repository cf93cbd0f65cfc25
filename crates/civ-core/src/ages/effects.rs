//! Age Effects
//!
//! Maps signals to the numeric gameplay effects an Age grants.

use civ_events::{EffectKey, Signal, SignalKind};
use std::collections::BTreeMap;

/// Ceiling the unity signal raises `ni_cap` to
pub const UNITY_NI_CAP: f64 = 10.0;

/// How a signal kind feeds an effect
#[derive(Debug, Clone, Copy, PartialEq)]
enum Contribution {
    /// `effect += rate * weight`
    Scaled(EffectKey, f64),
    /// `effect = max(effect, ceiling)`, independent of weight
    Ceiling(EffectKey, f64),
}

fn contribution(kind: SignalKind) -> Contribution {
    match kind {
        SignalKind::Survival => Contribution::Scaled(EffectKey::FoodYield, 0.03),
        SignalKind::Production => Contribution::Scaled(EffectKey::BuildSpeed, 0.03),
        SignalKind::Warfare => Contribution::Scaled(EffectKey::Combat, 0.05),
        SignalKind::Exploration => Contribution::Scaled(EffectKey::Trade, 0.05),
        SignalKind::Social => Contribution::Scaled(EffectKey::Stability, 0.05),
        SignalKind::Expression => Contribution::Scaled(EffectKey::Diplomacy, 0.05),
        SignalKind::Crisis => Contribution::Scaled(EffectKey::Resilience, 0.05),
        SignalKind::Unity => Contribution::Ceiling(EffectKey::NiCap, UNITY_NI_CAP),
    }
}

/// Accumulates effects over all positively weighted signals.
pub fn build_effects(signals: &[Signal]) -> BTreeMap<EffectKey, f64> {
    let mut effects = BTreeMap::new();

    for signal in signals.iter().filter(|s| s.weight > 0.0) {
        match contribution(signal.kind) {
            Contribution::Scaled(key, rate) => {
                *effects.entry(key).or_insert(0.0) += rate * signal.weight;
            }
            Contribution::Ceiling(key, ceiling) => {
                let current = effects.entry(key).or_insert(0.0);
                *current = f64::max(*current, ceiling);
            }
        }
    }

    effects
}

#[cfg(test)]
mod tests {
    use super::*;
    use civ_events::Domain;

    #[test]
    fn test_scaled_contributions() {
        let effects = build_effects(&[
            Signal::new(Domain::Survival, 2.0),
            Signal::new(Domain::Warfare, 0.5),
            Signal::new(SignalKind::Crisis, 1.0),
        ]);

        assert!((effects[&EffectKey::FoodYield] - 0.06).abs() < 1e-12);
        assert!((effects[&EffectKey::Combat] - 0.025).abs() < 1e-12);
        assert!((effects[&EffectKey::Resilience] - 0.05).abs() < 1e-12);
        assert_eq!(effects.len(), 3);
    }

    #[test]
    fn test_unity_is_a_ceiling() {
        let effects = build_effects(&[
            Signal::new(SignalKind::Unity, 0.1),
            Signal::new(SignalKind::Unity, 7.0),
        ]);
        assert_eq!(effects.get(&EffectKey::NiCap), Some(&10.0));
    }

    #[test]
    fn test_same_kind_accumulates() {
        let effects = build_effects(&[
            Signal::new(Domain::Social, 1.0),
            Signal::new(Domain::Social, 1.0),
        ]);
        assert!((effects[&EffectKey::Stability] - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_zero_weight_ignored() {
        let effects = build_effects(&[Signal::new(Domain::Expression, 0.0)]);
        assert!(effects.is_empty());
        assert!(build_effects(&[]).is_empty());
    }
}
