//! Processing log interface.
//!
//! After a successful invocation the front end may record which input
//! produced which output with which command. The store behind it is an
//! outside concern: the core only defines the [`ProcessingLog`] seam and a
//! helper that makes sure a failing log never changes the invocation's
//! result.

use std::path::Path;

use log::warn;
use thiserror::Error;

/// Errors a processing log may report.
#[derive(Debug, Error)]
pub enum JournalError {
    /// The backing database could not be opened or rejected a statement.
    #[error("Database error: {0}")]
    Database(String),
}

/// Sink for processing records.
pub trait ProcessingLog {
    /// Record that `input` was turned into `output` by `command`.
    fn record(&self, input: &Path, output: &Path, command: &str) -> Result<(), JournalError>;
}

/// A log that discards every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLog;

impl ProcessingLog for NullLog {
    fn record(&self, _input: &Path, _output: &Path, _command: &str) -> Result<(), JournalError> {
        Ok(())
    }
}

/// Record to `sink`, downgrading any failure to a warning.
pub fn record_quietly(sink: &dyn ProcessingLog, input: &Path, output: &Path, command: &str) {
    if let Err(err) = sink.record(input, output, command) {
        warn!("Could not log processing of {}: {err}", input.display());
    }
}
