//! # tlsgroups-core
//!
//! The deterministic generator for the TLS supported-groups table - THE LOGIC.
//!
//! Converts the IANA TLS "Supported Groups" registry CSV into the
//! `group_key_exchanges[]` C table consumed by the scanner's group tests.
//!
//! ## Pipeline
//!
//! ```text
//! registry.csv ──► reader ──► classifier ──► emitter ──► io::Write
//!                 RawRecord   GroupDescriptor   C block
//! ```
//!
//! ## Architectural Constraints
//!
//! - One pass, single-threaded, no async, no network
//! - No cross-row state: every record is classified on its own
//! - Row order is output order
//! - Integer arithmetic only

// =============================================================================
// MODULES
// =============================================================================

pub mod classifier;
pub mod emitter;
pub mod pipeline;
pub mod primitives;
pub mod reader;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{
    ColorTag, ConstantName, DiscardReason, GroupDescriptor, GroupId, GroupsError, KindTag,
    RawRecord,
};

// =============================================================================
// RE-EXPORTS: Pipeline stages
// =============================================================================

pub use classifier::{Classifier, Derivation, Traits, Verdict};
pub use emitter::{EmitOptions, Emitter};
pub use pipeline::{Generated, Pipeline, RunSummary};
pub use reader::{Registry, RowPolicy, Rows};
