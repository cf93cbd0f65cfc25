//! Configuration loading for the simulation.
//!
//! All run settings can be loaded from a TOML file. Every section is
//! optional; missing values fall back to the defaults below.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::ages::AgeRules;
use crate::error::ConfigError;
use crate::systems::{MilestoneRules, ProgressionCurve};

/// Complete simulation configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Turn count and seed
    #[serde(default)]
    pub run: RunConfig,
    /// Starting civilization
    #[serde(default)]
    pub civilization: CivilizationConfig,
    /// World event settings
    #[serde(default)]
    pub events: EventConfig,
    /// Diminishing-returns growth curve
    #[serde(default)]
    pub progression: ProgressionCurve,
    /// Minor and major thresholds
    #[serde(default)]
    pub milestones: MilestoneRules,
    /// Age generation
    #[serde(default)]
    pub ages: AgeRules,
    /// Output file locations
    #[serde(default)]
    pub output: OutputConfig,
}

impl SimConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Rejects values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.events.chance) {
            return Err(ConfigError::Invalid(format!(
                "events.chance must be within [0, 1], got {}",
                self.events.chance
            )));
        }
        if self.progression.base_cost <= 0.0 {
            return Err(ConfigError::Invalid("progression.base_cost must be positive".into()));
        }
        if self.milestones.minor_step <= 0.0 || self.milestones.major_step <= 0.0 {
            return Err(ConfigError::Invalid("milestone steps must be positive".into()));
        }
        if self.ages.signal_scale <= 0.0 {
            return Err(ConfigError::Invalid("ages.signal_scale must be positive".into()));
        }
        Ok(())
    }
}

/// Run parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Number of turns to simulate (coerced to at least 1)
    pub turns: u32,
    /// Random seed for reproducibility
    pub seed: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            turns: 20,
            seed: 12345,
        }
    }
}

/// Starting civilization settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CivilizationConfig {
    pub name: String,
    /// Initial value of every domain
    pub starting_value: f64,
    /// Initial national identity (clamped to [0, 10])
    pub starting_ni: f64,
}

impl Default for CivilizationConfig {
    fn default() -> Self {
        Self {
            name: civ_events::DEFAULT_CIV_NAME.to_string(),
            starting_value: civ_events::DEFAULT_DOMAIN_VALUE,
            starting_ni: 5.0,
        }
    }
}

/// World event settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventConfig {
    /// Per-turn probability that an event fires
    pub chance: f64,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self { chance: 0.30 }
    }
}

/// Output file locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub csv_file: String,
    pub snapshot_file: String,
    pub events_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("saves"),
            csv_file: "run.csv".to_string(),
            snapshot_file: "demo.json".to_string(),
            events_file: "events.jsonl".to_string(),
        }
    }
}

impl OutputConfig {
    pub fn csv_path(&self) -> PathBuf {
        self.dir.join(&self.csv_file)
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.dir.join(&self.snapshot_file)
    }

    pub fn events_path(&self) -> PathBuf {
        self.dir.join(&self.events_file)
    }
}

/// Generates a default configuration file content.
pub fn default_config_toml() -> String {
    r#"# Evolvera Simulation Configuration

[run]
turns = 20
seed = 12345

[civilization]
name = "Demo Tribe"
starting_value = 5.0
starting_ni = 5.0

[events]
# Chance per turn that one world event strikes
chance = 0.30

[progression]
# delta = xp / (base_cost * (1 + value * decay))
base_cost = 2.0
decay = 0.05

[milestones]
minor_step = 5.0
minor_bonus = 0.1
major_step = 15.0
major_bonus = 0.5

[ages]
# "legacy" fires both Age families on a first crossing, "single" only the gate
mode = "legacy"
biome_hint = "River"
unity_threshold = 9.0
signal_floor = 10.0
signal_scale = 10.0

[output]
dir = "saves"
csv_file = "run.csv"
snapshot_file = "demo.json"
events_file = "events.jsonl"
"#
    .to_string()
}
