//! Age Records
//!
//! An Age is a named milestone generated when a domain crosses a major
//! threshold. Records are append-only and never mutated after creation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::signal::{EffectKey, SignalKind};

/// Generates an Age ID from its 1-based position in the history.
pub fn generate_age_id(sequence: usize) -> String {
    format!("age_{:03}", sequence)
}

/// Which trigger family produced an Age
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeFamily {
    /// Tiered gate, one Age per 15-point tier per domain
    Gate,
    /// Single first-crossing trigger per domain
    Crossing,
}

/// A generated Age milestone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeRecord {
    /// Sequential identifier, `age_NNN`
    pub id: String,
    /// Generated display name
    pub name: String,
    /// Signal weights that produced this Age
    pub causes: BTreeMap<SignalKind, f64>,
    /// Gameplay effects granted
    pub effects: BTreeMap<EffectKey, f64>,
    pub started_turn: u32,
    /// Always `None`; nothing closes an Age yet
    pub ends_turn: Option<u32>,
}

impl AgeRecord {
    pub fn is_active(&self) -> bool {
        self.ends_turn.is_none()
    }

    pub fn effect(&self, key: EffectKey) -> Option<f64> {
        self.effects.get(&key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_id_generation() {
        assert_eq!(generate_age_id(1), "age_001");
        assert_eq!(generate_age_id(42), "age_042");
        assert_eq!(generate_age_id(1234), "age_1234");
    }

    #[test]
    fn test_age_record_serializes_open_end() {
        let record = AgeRecord {
            id: generate_age_id(1),
            name: "Era of Spears".to_string(),
            causes: BTreeMap::from([(SignalKind::Warfare, 1.0)]),
            effects: BTreeMap::from([(EffectKey::Combat, 0.05)]),
            started_turn: 3,
            ends_turn: None,
        };

        assert!(record.is_active());
        assert_eq!(record.effect(EffectKey::Combat), Some(0.05));

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""ends_turn":null"#));
        assert!(json.contains(r#""causes":{"warfare":1.0}"#));
    }
}
