//! One invocation, from parsed flags to a terminal outcome.

use std::path::{Path, PathBuf};

use log::info;
use rasterkit_core::codec::{decode_file, encode_file, ensure_distinct_paths, probe_file};
use rasterkit_core::journal::{record_quietly, ProcessingLog};
use rasterkit_core::{EditError, Operation, Outcome};

use crate::args::Cli;
use crate::help::help_text;
use crate::select::{select, Request};

/// Terminal result of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutcome {
    pub success: bool,
    /// Process exit status: `0` on success, otherwise the error's code.
    pub exit_code: i32,
    /// Text for stdout on success, or the error message for stderr.
    pub message: String,
}

impl ProcessOutcome {
    fn ok(message: String) -> Self {
        Self {
            success: true,
            exit_code: 0,
            message,
        }
    }

    /// Outcome for a run that panicked instead of returning.
    pub fn unexpected() -> Self {
        Self::failed(&EditError::General("unexpected failure".to_string()))
    }

    fn failed(err: &EditError) -> Self {
        Self {
            success: false,
            exit_code: err.exit_code().code(),
            message: err.to_string(),
        }
    }
}

impl From<Result<String, EditError>> for ProcessOutcome {
    fn from(result: Result<String, EditError>) -> Self {
        match result {
            Ok(message) => Self::ok(message),
            Err(err) => Self::failed(&err),
        }
    }
}

/// Output path used when `--output` is absent: `out` plus the input's
/// extension, or `out.bmp` if it has none.
pub fn default_output_path(input: &Path) -> PathBuf {
    match input.extension() {
        Some(ext) => {
            let mut name = std::ffi::OsString::from("out.");
            name.push(ext);
            PathBuf::from(name)
        }
        None => PathBuf::from("out.bmp"),
    }
}

/// Run the invocation described by `cli`, recording success to `log`.
///
/// The output file is written at most once, after the operation finished.
pub fn run(cli: &Cli, log: &dyn ProcessingLog) -> ProcessOutcome {
    execute(cli, log).into()
}

fn execute(cli: &Cli, log: &dyn ProcessingLog) -> Result<String, EditError> {
    if let Some(topic) = &cli.help {
        return Ok(help_text(topic));
    }

    let input = cli
        .input_path()
        .ok_or_else(|| EditError::Arguments("--input is required".to_string()))?;
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(input));

    let mut image = decode_file(input)?;

    match select(cli.info, &cli.ops, &cli.params)? {
        Request::Info => {
            let facts = probe_file(input)?;
            record_quietly(log, input, &output, "--info");
            Ok(facts.to_string())
        }
        Request::Edit(operation) => {
            let outcome = operation.apply(&mut image)?;
            ensure_distinct_paths(input, &output)?;
            encode_file(outcome.output(&image), &output)?;
            info!("saved {}", output.display());

            record_quietly(log, input, &output, &operation.to_string());
            Ok(success_message(&operation, &outcome, &output))
        }
    }
}

fn success_message(operation: &Operation, outcome: &Outcome, output: &Path) -> String {
    match (operation, outcome) {
        (Operation::ColorReplace { .. }, Outcome::Recolored { replaced }) => format!(
            "Replaced {replaced} pixels. Output saved to {}",
            output.display()
        ),
        _ => format!(
            "Operation completed successfully. Output saved to {}",
            output.display()
        ),
    }
}
