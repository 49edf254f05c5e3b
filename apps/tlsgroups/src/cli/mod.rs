//! # tlsgroups CLI Module
//!
//! Argument parsing and command dispatch.
//!
//! There is a single command: read the registry given as the positional
//! argument and print the table on standard output. Logs go to standard error.
//!
//! A wrong argument count prints the usage text on standard output and exits 0,
//! the way the generator has always behaved. A bad option value is reported
//! by clap on standard error with its usual exit code.

mod commands;

use chrono::NaiveDate;
use clap::Parser;
use clap::error::ErrorKind;
use std::io::Write;
use std::path::PathBuf;
use tlsgroups_core::primitives::REGISTRY_URL;
use tlsgroups_core::{EmitOptions, GroupsError, RowPolicy, RunSummary};

pub use commands::*;

/// Tool identity used when the program name is unavailable.
pub const DEFAULT_TOOL_NAME: &str = "tlsgroups";

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// tlsgroups - TLS supported-groups table generator
///
/// Turns the IANA TLS Supported Groups registry (CSV) into the
/// group_key_exchanges[] C table.
#[derive(Parser, Debug)]
#[command(name = "tlsgroups")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the registry CSV (tls-parameters-8.csv)
    pub registry: PathBuf,

    /// Date for the header comment, YYYY-MM-DD (default: today)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Skip rows with too few columns instead of aborting
    #[arg(long)]
    pub lenient: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Malformed-row policy selected on the command line.
    #[must_use]
    pub fn row_policy(&self) -> RowPolicy {
        if self.lenient {
            RowPolicy::Skip
        } else {
            RowPolicy::Strict
        }
    }
}

/// Usage text printed for a wrong invocation.
#[must_use]
pub fn usage(program: &str) -> String {
    format!(
        "\nUsage: {} tls_groups.csv\n\nHint: copy the TLS table in CSV format from <{}>.\n",
        program, REGISTRY_URL
    )
}

/// Whether a parse failure is a wrong invocation that gets the usage text.
///
/// Only argument-count mistakes qualify. Invalid values keep clap's diagnostic.
#[must_use]
pub fn is_usage_error(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::MissingRequiredArgument | ErrorKind::UnknownArgument | ErrorKind::TooManyValues
    )
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments, writing the table to `out`.
pub fn execute<W: Write>(cli: &Cli, program: &str, out: &mut W) -> Result<RunSummary, GroupsError> {
    let generated_on = cli.date.unwrap_or_else(today);
    let options = EmitOptions::new(program, format_date(generated_on));

    cmd_generate(&cli.registry, cli.row_policy(), &options, out)
}
