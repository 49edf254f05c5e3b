//! Integration tests for the tlsgroups command layer.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use clap::Parser;
use clap::error::ErrorKind;
use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;
use tlsgroups::cli::{Cli, execute, is_usage_error, usage};
use tlsgroups_core::{DiscardReason, GroupsError, RowPolicy};

const REGISTRY: &str = "\
Value,Description,DTLS-OK,Recommended,Reference,Comment
0,Unassigned,N,,,
23,secp256r1,Y,Y,[RFC8422],
29,x25519,Y,Y,[RFC8446][RFC7748],
256,ffdhe2048,Y,N,[RFC7919],
4588,X25519MLKEM768,Y,N,[draft-ietf-tls-ecdhe-mlkem-03],
";

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

fn registry_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn run(args: &[&str]) -> (Result<tlsgroups_core::RunSummary, GroupsError>, String) {
    let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
    let mut out = Vec::new();
    let result = execute(&cli, "tlsgroups", &mut out);
    (result, String::from_utf8(out).unwrap())
}

fn parse_error_kind(args: &[&str]) -> ErrorKind {
    match Cli::try_parse_from(args.iter().copied()) {
        Ok(cli) => panic!("parsed unexpectedly: {:?}", cli),
        Err(e) => e.kind(),
    }
}

/// Run the built binary with a clean logging environment.
fn run_binary(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tlsgroups"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("TLSGROUPS_LOG_FORMAT")
        .output()
        .unwrap()
}

// =============================================================================
// ARGUMENT PARSING
// =============================================================================

#[test]
fn test_missing_registry_is_usage_error() {
    assert!(is_usage_error(parse_error_kind(&["tlsgroups"])));
}

#[test]
fn test_extra_argument_is_usage_error() {
    assert!(is_usage_error(parse_error_kind(&["tlsgroups", "a.csv", "b.csv"])));
}

#[test]
fn test_unknown_flag_is_usage_error() {
    assert!(is_usage_error(parse_error_kind(&["tlsgroups", "--bogus", "a.csv"])));
}

#[test]
fn test_bad_option_value_is_not_usage_error() {
    for args in [
        &["tlsgroups", "--date", "2026-13-01", "a.csv"][..],
        &["tlsgroups", "--date", "yesterday", "a.csv"][..],
        &["tlsgroups", "a.csv", "--date"][..],
    ] {
        let kind = parse_error_kind(args);
        assert!(!is_usage_error(kind), "{:?} gave {:?}", args, kind);
    }
}

#[test]
fn test_defaults() {
    let cli = Cli::try_parse_from(["tlsgroups", "groups.csv"]).unwrap();
    assert_eq!(cli.registry.to_str(), Some("groups.csv"));
    assert_eq!(cli.date, None);
    assert!(!cli.verbose);
    assert_eq!(cli.row_policy(), RowPolicy::Strict);
}

#[test]
fn test_lenient_selects_skip_policy() {
    let cli = Cli::try_parse_from(["tlsgroups", "--lenient", "groups.csv"]).unwrap();
    assert_eq!(cli.row_policy(), RowPolicy::Skip);
}

#[test]
fn test_bad_date_rejected() {
    assert!(Cli::try_parse_from(["tlsgroups", "--date", "yesterday", "groups.csv"]).is_err());
}

#[test]
fn test_usage_text() {
    let text = usage("tlsgroups");
    assert!(text.starts_with("\nUsage: tlsgroups tls_groups.csv\n"));
    assert!(text.contains("<https://www.iana.org/assignments/tls-parameters/tls-parameters-8.csv>"));
}

// =============================================================================
// GENERATION
// =============================================================================

#[test]
fn test_generate_to_writer() {
    let file = registry_file(REGISTRY);
    let path = file.path().to_str().unwrap();
    let (result, text) = run(&["tlsgroups", "--date", "2026-10-18", path]);

    let summary = result.unwrap();
    assert_eq!(summary.rows, 6);
    assert_eq!(summary.retained, 3);
    assert_eq!(summary.discarded[&DiscardReason::NonRfcReference], 1);

    assert!(text.contains("  /* Auto-generated by tlsgroups on October 18, 2026. */\n"));
    let rows: Vec<&str> = text.lines().filter(|l| l.starts_with("    {")).collect();
    assert_eq!(
        rows,
        vec![
            "    {0x0017, \"secp256r1 (NIST P-256)\", 128, COL_PLAIN, NID_X9_62_prime256v1, NID_TYPE_ECDHE, 0},",
            "    {0x001d, \"x25519\", 128, COL_GREEN, -1, NID_TYPE_NA, 32},",
            "    {0x0100, \"ffdhe2048\", 112, COL_PLAIN, NID_ffdhe2048, NID_TYPE_DHE, 256},",
        ]
    );
}

#[test]
fn test_pinned_date_is_byte_identical() {
    let file = registry_file(REGISTRY);
    let path = file.path().to_str().unwrap();
    let (_, first) = run(&["tlsgroups", "--date", "2024-02-29", path]);
    let (_, second) = run(&["tlsgroups", "--date", "2024-02-29", path]);
    assert_eq!(first, second);
    assert!(first.contains("February 29, 2024"));
}

#[test]
fn test_missing_file_is_io_error() {
    let (result, text) = run(&["tlsgroups", "/nonexistent/registry.csv"]);
    assert!(matches!(result, Err(GroupsError::IoError(_))));
    assert!(text.is_empty());
}

#[test]
fn test_short_row_strict_and_lenient() {
    let file = registry_file("29,x25519,Y,Y,[RFC7748]\n30,x448\n");
    let path = file.path().to_str().unwrap();

    let (strict, _) = run(&["tlsgroups", path]);
    assert!(matches!(strict, Err(GroupsError::MalformedRow { line: 2, .. })));

    let (lenient, text) = run(&["tlsgroups", "--lenient", path]);
    assert_eq!(lenient.unwrap().retained, 1);
    assert!(text.contains("\"x25519\""));
}

// =============================================================================
// PROCESS CONTRACT
// =============================================================================

#[test]
fn test_binary_no_arguments_prints_usage_and_succeeds() {
    let output = run_binary(&[]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("\nUsage: "), "stdout: {:?}", stdout);
    assert!(stdout.contains(" tls_groups.csv\n\nHint: "));
}

#[test]
fn test_binary_extra_argument_prints_usage_and_succeeds() {
    let output = run_binary(&["a.csv", "b.csv"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8(output.stdout).unwrap().starts_with("\nUsage: "));
}

#[test]
fn test_binary_invalid_date_fails_on_stderr() {
    let file = registry_file(REGISTRY);
    let path = file.path().to_str().unwrap();
    let output = run_binary(&["--date", "2026-13-01", path]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("2026-13-01"), "stderr: {:?}", stderr);
}

#[test]
fn test_binary_missing_file_exits_one_with_empty_stdout() {
    let output = run_binary(&["/nonexistent/registry.csv"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("ERROR"), "stderr: {:?}", stderr);
    assert!(stderr.contains("/nonexistent/registry.csv"));
}

#[test]
fn test_binary_writes_table_to_stdout_and_logs_to_stderr() {
    let file = registry_file(REGISTRY);
    let path = file.path().to_str().unwrap();
    let output = run_binary(&["--date", "2026-10-18", path]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("\n  /* Auto-generated by "));
    assert!(stdout.ends_with("  };\n\n"));
    assert!(stdout.contains("    {0x001d, \"x25519\", 128, COL_GREEN, -1, NID_TYPE_NA, 32},\n"));
    assert!(!stdout.contains("INFO"));
    assert!(!stdout.contains("Read 6 rows"));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("INFO"), "stderr: {:?}", stderr);
    assert!(stderr.contains("Read 6 rows: 3 groups emitted, 3 discarded"));
}
