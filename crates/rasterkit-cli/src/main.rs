use std::panic::{self, AssertUnwindSafe};
use std::process;

use clap::Parser;
use log::{debug, warn};
use rasterkit_cli::journal::SqliteLog;
use rasterkit_cli::{run, Cli, ProcessOutcome};
use rasterkit_core::journal::{NullLog, ProcessingLog};
use rasterkit_core::ExitCode;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    if std::env::args_os().len() <= 1 {
        println!("{}", rasterkit_cli::help::help_text(rasterkit_cli::help::GENERAL));
        return;
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.kind() == clap::error::ErrorKind::DisplayVersion => err.exit(),
        Err(err) => {
            debug!("argument parsing failed: {err}");
            eprintln!("Error: Incorrect argument");
            process::exit(ExitCode::CmdArgs.code());
        }
    };

    let sqlite;
    let log: &dyn ProcessingLog = if cli.no_log {
        &NullLog
    } else {
        match SqliteLog::open(&cli.log_db) {
            Ok(db) => {
                sqlite = db;
                &sqlite
            }
            Err(err) => {
                warn!("Could not initialize database: {err}");
                &NullLog
            }
        }
    };

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| run(&cli, log)))
        .unwrap_or_else(|_| ProcessOutcome::unexpected());

    if outcome.success {
        println!("{}", outcome.message);
    } else {
        eprintln!("Error: {}", outcome.message);
        process::exit(outcome.exit_code);
    }
}
