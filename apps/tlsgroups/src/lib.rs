//! # tlsgroups
//!
//! Library target of the `tlsgroups` binary, so the command layer can be
//! driven from integration tests.

pub mod cli;
