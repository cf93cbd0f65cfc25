//! Turn Log
//!
//! CSV telemetry, one row per turn, reals fixed to three decimals.

use civ_events::TurnRecord;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::OutputError;

pub const CSV_HEADER: &str =
    "turn,action1,action2,event,survival,production,warfare,exploration,social,expression,ni";

/// Formats one CSV row. The event column is empty when no event fired.
pub fn format_csv_row(record: &TurnRecord) -> String {
    let d = &record.domains;
    format!(
        "{},{},{},{},{:.3},{:.3},{:.3},{:.3},{:.3},{:.3},{:.3}",
        record.turn,
        record.action1,
        record.action2,
        record.event.as_deref().unwrap_or(""),
        d.survival,
        d.production,
        d.warfare,
        d.exploration,
        d.social,
        d.expression,
        record.ni
    )
}

/// Streams turn records as CSV
pub struct TurnLogWriter<W: Write> {
    writer: W,
    rows_written: u64,
}

impl TurnLogWriter<BufWriter<File>> {
    /// Creates (truncating) a CSV file, making parent directories as needed.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, OutputError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Self::from_writer(BufWriter::new(File::create(path)?))
    }
}

impl<W: Write> TurnLogWriter<W> {
    /// Wraps a writer and emits the header row.
    pub fn from_writer(mut writer: W) -> Result<Self, OutputError> {
        writeln!(writer, "{}", CSV_HEADER)?;
        Ok(Self {
            writer,
            rows_written: 0,
        })
    }

    pub fn write_record(&mut self, record: &TurnRecord) -> Result<(), OutputError> {
        writeln!(self.writer, "{}", format_csv_row(record))?;
        self.rows_written += 1;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), OutputError> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
