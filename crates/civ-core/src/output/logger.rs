//! Chronicle Logger
//!
//! Append-only JSONL logging of chronicle events.

use civ_events::ChronicleEvent;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::OutputError;

/// Writes chronicle events to a JSONL file, one per line
pub struct EventLogger {
    writer: Option<BufWriter<File>>,
    event_count: u64,
}

impl EventLogger {
    /// Create a new event logger writing to the specified path
    pub fn new(path: impl AsRef<Path>) -> Result<Self, OutputError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        Ok(Self {
            writer: Some(BufWriter::new(file)),
            event_count: 0,
        })
    }

    /// Create a logger that discards events (for testing)
    pub fn null() -> Self {
        Self {
            writer: None,
            event_count: 0,
        }
    }

    /// Get the current event count
    pub fn event_count(&self) -> u64 {
        self.event_count
    }

    /// Log an event to the file
    pub fn log(&mut self, event: &ChronicleEvent) -> Result<(), OutputError> {
        self.event_count += 1;
        if let Some(ref mut writer) = self.writer {
            let json = serde_json::to_string(event)?;
            writeln!(writer, "{}", json)?;
        }
        Ok(())
    }

    /// Log multiple events
    pub fn log_batch(&mut self, events: &[ChronicleEvent]) -> Result<(), OutputError> {
        for event in events {
            self.log(event)?;
        }
        Ok(())
    }

    /// Flush the buffer to disk
    pub fn flush(&mut self) -> Result<(), OutputError> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }
}

impl Drop for EventLogger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            tracing::warn!("Failed to flush event logger: {}", e);
        }
    }
}
