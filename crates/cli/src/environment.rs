//! The `alignak-environment` command.
//!
//! Responsibilities:
//! - Load the configuration file named on the command line.
//! - Print the verbose trace of every section and key.
//! - Print the shell export statements and the Alignak version.
//!
//! Does NOT handle:
//! - Writing the process environment (done by `main`, the only place allowed to).
//! - Mapping errors to exit codes (see `error` module).

use alignak_config::projection::version_export;
use alignak_config::{ConfigLoader, Resolver};
use anyhow::Context;
use std::io::Write;

use crate::args::Cli;

const WRITE_FAILED: &str = "failed to write to standard output";

/// Load and resolve the configuration, printing the verbose trace if asked.
pub fn load(cli: &Cli, out: &mut impl Write) -> anyhow::Result<Resolver> {
    if cli.verbose {
        write_header(cli, out).context(WRITE_FAILED)?;
    }

    let resolver = ConfigLoader::new()
        .with_config_path(&cli.cfg_file)
        .load()?;

    if cli.verbose {
        write_trace(&resolver, out).context(WRITE_FAILED)?;
    }
    Ok(resolver)
}

/// Print one `export` line per resolved key, then the version line.
pub fn export(resolver: &Resolver, out: &mut impl Write) -> anyhow::Result<()> {
    write_exports(resolver, out).context(WRITE_FAILED)
}

fn write_header(cli: &Cli, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "Alignak environment parser:")?;
    writeln!(out, "- verbose mode is On")?;
    writeln!(out, "- configuration file name: {}", cli.cfg_file.display())
}

fn write_trace(resolver: &Resolver, out: &mut impl Write) -> std::io::Result<()> {
    for section in resolver.document().sections() {
        writeln!(out, "- section: {}", section.name)?;
        for (key, value) in section.properties.iter() {
            writeln!(out, "  {}.{} = {}", section.name, key, value)?;
        }
    }
    writeln!(out, "Configuration file parsed correctly")
}

fn write_exports(resolver: &Resolver, out: &mut impl Write) -> std::io::Result<()> {
    for line in resolver.export_as_shell() {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "{}", version_export())?;
    out.flush()
}
