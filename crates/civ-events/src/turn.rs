//! Turn Output Types
//!
//! Per-turn telemetry rows and the chronicle of notable happenings that
//! writers and the console consume.

use serde::{Deserialize, Serialize};

use crate::age::AgeFamily;
use crate::domain::{Domain, DomainValues};

/// One telemetry row, written after every turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub turn: u32,
    pub action1: String,
    pub action2: String,
    /// Name of the event that struck this turn, if any
    pub event: Option<String>,
    /// Post-turn domain values
    pub domains: DomainValues,
    pub ni: f64,
}

/// Notable happening during a turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChronicleEvent {
    /// A world event fired
    EventStruck { turn: u32, name: String },

    /// A 5-point tier was crossed for the first time
    MinorPerk {
        turn: u32,
        domain: Domain,
        tier: i64,
    },

    /// A 15-point tier was crossed for the first time
    MajorBreakthrough {
        turn: u32,
        domain: Domain,
        tier: i64,
    },

    /// A new Age was generated
    AgeBegan {
        turn: u32,
        age_id: String,
        name: String,
        domain: Domain,
        family: AgeFamily,
        /// Domain value threshold that triggered it
        threshold: f64,
    },
}

impl ChronicleEvent {
    pub fn turn(&self) -> u32 {
        match self {
            ChronicleEvent::EventStruck { turn, .. }
            | ChronicleEvent::MinorPerk { turn, .. }
            | ChronicleEvent::MajorBreakthrough { turn, .. }
            | ChronicleEvent::AgeBegan { turn, .. } => *turn,
        }
    }

    pub fn is_age(&self) -> bool {
        matches!(self, ChronicleEvent::AgeBegan { .. })
    }
}
