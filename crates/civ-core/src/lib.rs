//! Evolvera Civilization Simulation Library
//!
//! Simulates one civilization's progress across six competence domains over
//! discrete turns, and generates named Ages as domains cross thresholds.
//!
//! # Modules
//!
//! - [`catalog`]: Static action, event, and lexicon tables
//! - [`systems`]: Progression, action/event resolution, milestones, NI
//! - [`ages`]: Signal extraction, Age naming, Age effects
//! - [`simulation`]: Turn orchestrator
//! - [`config`]: TOML configuration
//! - [`output`]: CSV, JSONL, snapshot, and console writers

pub mod ages;
pub mod catalog;
pub mod config;
pub mod error;
pub mod output;
pub mod simulation;
pub mod systems;

pub use civ_events::*;

pub use ages::{AgeRules, AgeTriggerMode};
pub use catalog::{Action, EventDefinition};
pub use config::{default_config_toml, SimConfig};
pub use error::{CivError, ConfigError, EvolveraError, OutputError};
pub use simulation::{Simulation, TurnOutcome};
