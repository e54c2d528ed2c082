//! alignak-environment - Export an Alignak configuration as shell variables.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Load the configuration file and expose every `section.key` to the process environment.
//! - Print shell `export` statements on stdout for `eval` by launch scripts.
//!
//! Does NOT handle:
//! - Parsing or interpolation logic (see `crates/config`).
//! - Starting or supervising Alignak daemons.
//!
//! Invariants:
//! - stdout only carries the verbose trace and export statements; logs and
//!   diagnostics go to stderr.
//! - The process environment is written once, before any other thread exists.

mod args;
mod environment;
mod error;

use args::Cli;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse_or_exit();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose {
            "alignak_config=debug"
        } else {
            "warn"
        })
    });
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut stdout = std::io::stdout().lock();
    let result = environment::load(&cli, &mut stdout).and_then(|resolver| {
        let projected = resolver.project_to_environment();
        // SAFETY: single-threaded at this point; nothing else touches the environment.
        unsafe { projected.apply_to_process_env() }?;
        tracing::debug!(variables = projected.len(), "environment updated");
        environment::export(&resolver, &mut stdout)
    });

    let exit_code = match result {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("* {:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
