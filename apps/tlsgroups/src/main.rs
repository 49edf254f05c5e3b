//! # tlsgroups - TLS Supported Groups Table Generator
//!
//! The binary for the tlsgroups-core generator.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                apps/tlsgroups (THE BINARY)           │
//! │                                                      │
//! │   ┌─────────────┐               ┌────────────────┐   │
//! │   │   CLI       │               │  Logging       │   │
//! │   │  (clap)     │               │  (stderr only) │   │
//! │   └──────┬──────┘               └────────────────┘   │
//! │          ▼                                           │
//! │   ┌────────────────┐                                 │
//! │   │ tlsgroups-core │ ──► stdout                      │
//! │   │  (THE LOGIC)   │                                 │
//! │   └────────────────┘                                 │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! tlsgroups tls-parameters-8.csv > groups.inc
//! tlsgroups --date 2026-01-31 tls-parameters-8.csv
//! TLSGROUPS_LOG_FORMAT=json RUST_LOG=tlsgroups_core=debug tlsgroups tls-parameters-8.csv
//! ```

use clap::Parser;
use tlsgroups::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    let program = std::env::args()
        .next()
        .unwrap_or_else(|| cli::DEFAULT_TOOL_NAME.to_string());

    // Parse CLI arguments. A wrong argument count is not an error exit.
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if cli::is_usage_error(e.kind()) => {
            print!("{}", cli::usage(&program));
            std::process::exit(0);
        }
        Err(e) => e.exit(),
    };

    init_tracing(cli.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = cli::execute(&cli, &program, &mut out) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing on stderr; stdout is reserved for the generated table.
///
/// TLSGROUPS_LOG_FORMAT=json enables machine-parseable output.
fn init_tracing(verbose: bool) {
    let log_format = std::env::var("TLSGROUPS_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("tlsgroups=debug,tlsgroups_core=debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "tlsgroups=info,tlsgroups_core=info".into())
    };

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}
