//! # Core Type Definitions
//!
//! This module contains all core types for the supported-groups generator:
//! - Registry input (`RawRecord`)
//! - Derived output (`GroupDescriptor`, `GroupId`, `ColorTag`, `KindTag`, `ConstantName`)
//! - Discard bookkeeping (`DiscardReason`)
//! - Error types (`GroupsError`)
//!
//! ## Determinism Guarantees
//!
//! All types in this module:
//! - Use integer arithmetic only (no floating-point)
//! - Implement `Ord` where they are used as `BTreeMap` keys
//! - Are immutable once the classifier has built them

use std::fmt;
use thiserror::Error;

// =============================================================================
// REGISTRY INPUT
// =============================================================================

/// One data row of the registry, reduced to the three columns the classifier reads.
///
/// Produced by the reader, consumed once by the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// 1-based line number where the record starts in the source file.
    pub line: usize,
    /// Column 0: the registry value (decimal identifier, or a range/header text).
    pub id: String,
    /// Column 1: the group name ("Description" in the registry).
    pub name: String,
    /// Column 4: the reference, e.g. `[RFC8422]` or `[draft-ietf-tls-...]`.
    pub reference: String,
}

impl RawRecord {
    /// Create a record that did not come from a file (line 0).
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            line: 0,
            id: id.into(),
            name: name.into(),
            reference: reference.into(),
        }
    }

    /// Attach the source line number.
    #[must_use]
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }
}

// =============================================================================
// GROUP IDENTIFIER
// =============================================================================

/// Registry-assigned TLS NamedGroup code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupId(pub u16);

impl GroupId {
    /// Get the raw code point.
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl fmt::Display for GroupId {
    /// Rendered as a C hex literal, always four digits: `0x001d`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04x}", self.0)
    }
}

// =============================================================================
// TAGS
// =============================================================================

/// Color annotation used by the consuming scanner when printing a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ColorTag {
    /// Neither notably vetted nor weak.
    #[default]
    Plain,
    /// Well-vetted curve.
    Green,
    /// Below the minimum strength threshold.
    Red,
}

impl ColorTag {
    /// The C symbol the table row uses for this color.
    #[must_use]
    pub const fn as_c_symbol(self) -> &'static str {
        match self {
            Self::Plain => "COL_PLAIN",
            Self::Green => "COL_GREEN",
            Self::Red => "COL_RED",
        }
    }
}

/// Structural category of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KindTag {
    /// Non-parametrized modern curves (X25519/X448), handled on a separate code path.
    NotApplicable,
    /// Elliptic-curve Diffie-Hellman.
    Ecdhe,
    /// Finite-field Diffie-Hellman.
    Ffdhe,
}

impl KindTag {
    /// The C symbol the table row uses for this kind.
    #[must_use]
    pub const fn as_c_symbol(self) -> &'static str {
        match self {
            Self::NotApplicable => "NID_TYPE_NA",
            Self::Ecdhe => "NID_TYPE_ECDHE",
            Self::Ffdhe => "NID_TYPE_DHE",
        }
    }
}

/// Symbol emitted for a group without a derived kind.
pub const KIND_PLACEHOLDER: &str = "NID_TYPE_x";

/// Symbolic constant (OpenSSL NID) assigned to a group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConstantName {
    /// A named NID, e.g. `NID_X9_62_prime256v1`.
    Symbol(String),
    /// The group has no NID at all; serialized as `-1`.
    Absent,
    /// Unrecognized group; no derivation was possible. Serialized as `NID_x`.
    Placeholder,
}

impl ConstantName {
    /// `NID_<name>` for names that map straight onto an OpenSSL NID.
    #[must_use]
    pub fn nid_for(name: &str) -> Self {
        Self::Symbol(format!("NID_{}", name))
    }
}

impl fmt::Display for ConstantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbol(s) => f.write_str(s),
            Self::Absent => f.write_str("-1"),
            Self::Placeholder => f.write_str("NID_x"),
        }
    }
}

// =============================================================================
// GROUP DESCRIPTOR
// =============================================================================

/// The derived, durable description of one retained registry group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupDescriptor {
    /// Registry code point.
    pub id: GroupId,
    /// Display name, possibly annotated (e.g. `secp256r1 (NIST P-256)`).
    pub name: String,
    /// Symmetric-equivalent security strength, truncated to whole bits.
    pub security_bits: u32,
    /// Color annotation after the strength override.
    pub color: ColorTag,
    /// Symbolic constant for downstream code.
    pub constant: ConstantName,
    /// Structural category; `None` for unrecognized groups.
    pub kind: Option<KindTag>,
    /// Size of the key-exchange value on the wire in bytes; 0 if not fixed.
    pub key_exchange_len: u32,
}

impl GroupDescriptor {
    /// Symbol for the kind column.
    #[must_use]
    pub fn kind_symbol(&self) -> &'static str {
        self.kind.map_or(KIND_PLACEHOLDER, KindTag::as_c_symbol)
    }
}

// =============================================================================
// DISCARDS
// =============================================================================

/// Why a registry row produced no descriptor.
///
/// Discards are expected data-quality filtering, never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiscardReason {
    /// Column 0 is not an integer (header row, ranges such as `0-22`).
    NonNumericId,
    /// Name is exactly `Reserved` or `Unassigned`.
    ReservedOrUnassigned,
    /// The reference has no closing bracket.
    UnparseableReference,
    /// The reference is not a numbered RFC (drafts, `RFC-ietf-...`).
    NonRfcReference,
    /// Category excluded outright (`arbitrary_*`).
    ExcludedCategory,
}

impl fmt::Display for DiscardReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NonNumericId => "non-numeric id",
            Self::ReservedOrUnassigned => "reserved/unassigned",
            Self::UnparseableReference => "unparseable reference",
            Self::NonRfcReference => "non-RFC reference",
            Self::ExcludedCategory => "excluded category",
        };
        f.write_str(s)
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while generating the table.
///
/// - No silent failures for structurally surprising input
/// - Use `Result<T, GroupsError>` for fallible operations
/// - Expected heterogeneity is a `DiscardReason`, not an error
#[derive(Debug, Error)]
pub enum GroupsError {
    /// An I/O error occurred (open, read, or write).
    #[error("I/O error: {0}")]
    IoError(String),

    /// A row has fewer columns than the reader requires.
    #[error("Malformed row at line {line}: {found} columns, need at least {required}")]
    MalformedRow {
        line: usize,
        found: usize,
        required: usize,
    },

    /// A row matched a name rule but its numeric segment could not be derived.
    #[error("Cannot classify group '{name}': {reason}")]
    ClassificationError { name: String, reason: String },
}

// =============================================================================
// TESTS
// =============================================================================
