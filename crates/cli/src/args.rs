//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Turn clap failures into the documented usage exit code.
//!
//! Non-responsibilities:
//! - Does not load the configuration (see `environment` module).

use clap::Parser;
use clap::error::ErrorKind;
use std::path::PathBuf;

use crate::error::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "alignak-environment")]
#[command(
    about = "Parse an Alignak configuration file and print its variables as shell exports",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Output:\n  One `export NAME=value` line per configuration variable, followed by\n  `export ALIGNAK_VERSION=<version>`. Variable names only contain [A-Z0-9_];\n  values are quoted to be shell-safe.\n\nExamples:\n  eval \"$(alignak-environment /usr/local/etc/alignak/alignak.ini)\"\n  alignak-environment -v ../etc/alignak-realm2.ini\n\nExit codes:\n  0   success\n  1   the configuration file does not exist\n  2   the configuration file is not correctly formatted\n  3   interpolation variables are not correctly declared/used\n  64  command line parameters are not used correctly\n"
)]
pub struct Cli {
    /// Alignak configuration file to parse
    #[arg(value_name = "CFG_FILE", env = "ALIGNAK_CONFIGURATION_FILE")]
    pub cfg_file: PathBuf,

    /// Run in verbose mode (print information on the console output)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse the process arguments.
    ///
    /// Help and version requests print and exit 0; any other clap error
    /// prints a diagnostic and exits with the usage code.
    pub fn parse_or_exit() -> Self {
        match Self::try_parse() {
            Ok(cli) => cli,
            Err(e) => match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    // Printing help can only fail on a closed stdout.
                    let _ = e.print();
                    std::process::exit(ExitCode::Success.as_i32());
                }
                _ => {
                    eprintln!("Command line parsing error:\n{}", e);
                    std::process::exit(ExitCode::Usage.as_i32());
                }
            },
        }
    }
}
