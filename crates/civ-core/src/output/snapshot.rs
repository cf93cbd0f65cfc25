//! Civilization snapshot serialization.

use civ_events::Civilization;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::error::OutputError;

/// Serializes the full civilization as pretty JSON.
pub fn snapshot_to_json(civ: &Civilization) -> Result<String, OutputError> {
    Ok(serde_json::to_string_pretty(civ)?)
}

/// Writes the snapshot, creating parent directories as needed.
pub fn write_snapshot(civ: &Civilization, path: impl AsRef<Path>) -> Result<(), OutputError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, civ)?;
    Ok(())
}

/// Loads a snapshot written by [`write_snapshot`].
pub fn read_snapshot(path: impl AsRef<Path>) -> Result<Civilization, OutputError> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}
