//! Shared data types for the civilization simulation.
//!
//! This crate contains pure data structures with no simulation logic.
//! The simulation core mutates them; writers serialize them.

pub mod age;
pub mod civilization;
pub mod domain;
pub mod signal;
pub mod turn;

// Re-export domain types
pub use domain::{Domain, DomainValues, ParseError, DEFAULT_DOMAIN_VALUE};

// Re-export signal types
pub use signal::{EffectKey, Signal, SignalKind};

// Re-export age types
pub use age::{generate_age_id, AgeFamily, AgeRecord};

// Re-export civilization state
pub use civilization::{Civilization, DEFAULT_CIV_NAME, NI_MAX, NI_MIN};

// Re-export turn output types
pub use turn::{ChronicleEvent, TurnRecord};
