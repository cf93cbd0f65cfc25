//! Output Module
//!
//! Writers for per-turn telemetry, the chronicle, and the final snapshot.
//! The simulation itself never touches the filesystem.

pub mod console;
pub mod csv;
pub mod logger;
pub mod snapshot;

pub use console::{format_chronicle, format_turn_line};
pub use csv::{format_csv_row, TurnLogWriter, CSV_HEADER};
pub use logger::EventLogger;
pub use snapshot::{read_snapshot, snapshot_to_json, write_snapshot};
