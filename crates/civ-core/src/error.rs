//! Error types for the simulation core.

use civ_events::ParseError;
use thiserror::Error;

/// Closed-catalog violations. Any of these indicates a programming defect
/// or bad external input, never a recoverable runtime condition.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CivError {
    #[error("invalid action: {0}")]
    UnknownAction(String),

    #[error("invalid event: {0}")]
    UnknownEvent(String),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Errors that can occur while persisting run output.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Top-level error for the binary.
#[derive(Error, Debug)]
pub enum EvolveraError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("output error: {0}")]
    Output(#[from] OutputError),
}

pub type Result<T> = std::result::Result<T, EvolveraError>;
