//! rasterkit command line front end.
//!
//! Parses the flat flag set, selects the single operation it names, runs it
//! through `rasterkit-core` and records successful runs in an SQLite
//! processing log.

pub mod args;
pub mod help;
pub mod journal;
pub mod run;
pub mod select;

pub use args::Cli;
pub use run::{run, ProcessOutcome};
