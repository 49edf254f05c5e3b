//! # CLI Command Implementations
//!
//! This module contains the actual implementation of the generate command.

use chrono::{Local, NaiveDate};
use std::io::Write;
use std::path::Path;
use tlsgroups_core::{EmitOptions, GroupsError, Pipeline, Registry, RowPolicy, RunSummary};

// =============================================================================
// DATES
// =============================================================================

/// Today's date in local time.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Header date format: `October 18, 2026`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

// =============================================================================
// GENERATE COMMAND
// =============================================================================

/// Read the registry, classify every row and write the table.
pub fn cmd_generate<W: Write>(
    registry: &Path,
    policy: RowPolicy,
    options: &EmitOptions,
    out: &mut W,
) -> Result<RunSummary, GroupsError> {
    tracing::info!("Generating from {:?} (policy: {:?})", registry, policy);

    let registry = Registry::open(registry)?.with_policy(policy);
    let summary = Pipeline::generate(&registry, options, out)?;

    log_summary(&summary);
    Ok(summary)
}

fn log_summary(summary: &RunSummary) {
    tracing::info!(
        "Read {} rows: {} groups emitted, {} discarded",
        summary.rows,
        summary.retained,
        summary.discarded_total()
    );
    for (reason, count) in &summary.discarded {
        tracing::debug!("  {}: {}", reason, count);
    }
}
