//! # Classifier Module
//!
//! Decides, row by row, whether a registry record describes a usable group and
//! derives its descriptor.
//!
//! Evaluation order:
//! 1. Column 0 must be an integer (drops the header row and ranges)
//! 2. `Reserved` / `Unassigned` are dropped
//! 3. The reference must be a numbered RFC: `[RFC<digits>]...`
//! 4. Name rules, first match wins (see [`RULES`]); no match keeps the row
//!    with placeholder metadata
//! 5. Anything under [`MIN_SECURITY_BITS`] is forced to red, whatever color the
//!    rule assigned
//!
//! Every step is a pure function of the record. There is no cross-row state.

use crate::primitives::{
    ARBITRARY_PREFIX, BRAINPOOL_PREFIX, CURVE_SUFFIX_LEN, FFDHE_GROUPS, FFDHE_PREFIX,
    MIN_SECURITY_BITS, MONTGOMERY_CURVES, NIST_ALIASES, RESERVED_NAMES, RFC_MARKER_LEN,
    SEC_DIGITS_OFFSET, SEC_GREEN, SEC_NID_ALIASES, SEC_PREFIX, TLS13_MARKER, lookup,
    lookup_strength,
};
use crate::{
    ColorTag, ConstantName, DiscardReason, GroupDescriptor, GroupId, GroupsError, KindTag,
    RawRecord,
};

// =============================================================================
// VERDICT
// =============================================================================

/// Outcome of classifying one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The row becomes a table entry.
    Keep(GroupDescriptor),
    /// The row is filtered out.
    Discard(DiscardReason),
}

impl Verdict {
    /// The descriptor, if the row was kept.
    #[must_use]
    pub fn into_descriptor(self) -> Option<GroupDescriptor> {
        match self {
            Self::Keep(d) => Some(d),
            Self::Discard(_) => None,
        }
    }
}

// =============================================================================
// NAME RULES
// =============================================================================

/// Metadata a name rule derives for a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traits {
    /// Name shown in the table, e.g. `secp256r1 (NIST P-256)`.
    pub display_name: String,
    /// Estimated strength in bits, before the strength override.
    pub security_bits: u32,
    /// Color picked by the rule; may still be forced to red.
    pub color: ColorTag,
    /// Library constant for the group.
    pub constant: ConstantName,
    /// Key-exchange category; `None` renders as the placeholder tag.
    pub kind: Option<KindTag>,
    /// Key-exchange length in bytes, 0 when unknown.
    pub key_exchange_len: u32,
}

impl Traits {
    /// Metadata for a group no rule recognizes.
    #[must_use]
    pub fn placeholder(name: &str) -> Self {
        Self {
            display_name: name.to_string(),
            security_bits: 0,
            color: ColorTag::Plain,
            constant: ConstantName::Placeholder,
            kind: None,
            key_exchange_len: 0,
        }
    }
}

/// What a matching rule decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Derivation {
    /// Drop the row no matter what.
    Exclude,
    /// Keep the row with these traits.
    Derived(Traits),
}

/// One entry of the ordered rule list: a name predicate and its deriver.
pub struct Rule {
    /// Short name used in trace logs.
    pub label: &'static str,
    /// Whether the rule applies to a group name.
    pub matches: fn(&str) -> bool,
    /// Derive the row's traits. Only called when `matches` is true.
    pub derive: fn(&str) -> Result<Derivation, GroupsError>,
}

/// Name rules in priority order. The first rule whose predicate matches decides.
pub const RULES: &[Rule] = &[
    Rule {
        label: "arbitrary",
        matches: |name| name.starts_with(ARBITRARY_PREFIX),
        derive: |_| Ok(Derivation::Exclude),
    },
    Rule {
        label: "sec",
        matches: |name| name.starts_with(SEC_PREFIX),
        derive: derive_sec,
    },
    Rule {
        label: "brainpool",
        matches: |name| name.starts_with(BRAINPOOL_PREFIX),
        derive: derive_brainpool,
    },
    Rule {
        label: "montgomery",
        matches: |name| lookup_strength(MONTGOMERY_CURVES, name).is_some(),
        derive: derive_montgomery,
    },
    Rule {
        label: "ffdhe",
        matches: |name| name.starts_with(FFDHE_PREFIX),
        derive: derive_ffdhe,
    },
];

/// Parse the digit run `name[start..len - CURVE_SUFFIX_LEN]` of a curve name.
fn curve_digits(name: &str, start: usize) -> Result<u32, GroupsError> {
    let end = name.len().checked_sub(CURVE_SUFFIX_LEN);
    let digits = end
        .filter(|&end| end > start)
        .and_then(|end| name.get(start..end))
        .ok_or_else(|| GroupsError::ClassificationError {
            name: name.to_string(),
            reason: "name too short for a curve size".to_string(),
        })?;

    digits
        .parse::<u32>()
        .map_err(|_| GroupsError::ClassificationError {
            name: name.to_string(),
            reason: format!("'{}' is not a curve size", digits),
        })
}

fn derive_sec(name: &str) -> Result<Derivation, GroupsError> {
    let size = curve_digits(name, SEC_DIGITS_OFFSET)?;

    let display_name = match lookup(NIST_ALIASES, name) {
        Some(nist) => format!("{} ({})", name, nist),
        None => name.to_string(),
    };
    let constant = match lookup(SEC_NID_ALIASES, name) {
        Some(alias) => ConstantName::Symbol(alias.to_string()),
        None => ConstantName::nid_for(name),
    };
    let color = if SEC_GREEN.contains(&name) {
        ColorTag::Green
    } else {
        ColorTag::Plain
    };

    Ok(Derivation::Derived(Traits {
        display_name,
        security_bits: size / 2,
        color,
        constant,
        kind: Some(KindTag::Ecdhe),
        key_exchange_len: 0,
    }))
}

fn derive_brainpool(name: &str) -> Result<Derivation, GroupsError> {
    let curve = name.strip_suffix(TLS13_MARKER).unwrap_or(name);
    let size = curve_digits(curve, BRAINPOOL_PREFIX.len()).map_err(|e| match e {
        GroupsError::ClassificationError { reason, .. } => GroupsError::ClassificationError {
            name: name.to_string(),
            reason,
        },
        other => other,
    })?;

    Ok(Derivation::Derived(Traits {
        display_name: name.to_string(),
        security_bits: size / 2,
        color: ColorTag::Plain,
        constant: ConstantName::nid_for(name),
        kind: Some(KindTag::Ecdhe),
        key_exchange_len: 0,
    }))
}

fn derive_montgomery(name: &str) -> Result<Derivation, GroupsError> {
    let (security_bits, key_exchange_len) =
        lookup_strength(MONTGOMERY_CURVES, name).unwrap_or((0, 0));

    Ok(Derivation::Derived(Traits {
        display_name: name.to_string(),
        security_bits,
        color: ColorTag::Green,
        constant: ConstantName::Absent,
        kind: Some(KindTag::NotApplicable),
        key_exchange_len,
    }))
}

fn derive_ffdhe(name: &str) -> Result<Derivation, GroupsError> {
    // Sizes outside the table keep zero strength and get flagged red later.
    let (security_bits, key_exchange_len) = lookup_strength(FFDHE_GROUPS, name).unwrap_or((0, 0));

    Ok(Derivation::Derived(Traits {
        display_name: name.to_string(),
        security_bits,
        color: ColorTag::Plain,
        constant: ConstantName::nid_for(name),
        kind: Some(KindTag::Ffdhe),
        key_exchange_len,
    }))
}

// =============================================================================
// CLASSIFIER
// =============================================================================

/// Row classifier. Stateless; all methods are associated functions.
pub struct Classifier;

impl Classifier {
    /// Parse column 0. `None` means the row is not a data row.
    #[must_use]
    pub fn parse_id(id: &str) -> Option<GroupId> {
        id.trim().parse::<u16>().ok().map(GroupId)
    }

    /// Is this a placeholder row rather than a group?
    #[must_use]
    pub fn is_reserved(name: &str) -> bool {
        RESERVED_NAMES.contains(&name)
    }

    /// Extract the RFC number from a reference such as `[RFC8422][RFC9874]`.
    ///
    /// The first character is taken to be the opening bracket and the three
    /// characters after it the `RFC` marker; the digits run up to the first `]`.
    pub fn rfc_number(reference: &str) -> Result<u32, DiscardReason> {
        let mut chars = reference.chars();
        chars.next();
        let inner = chars.as_str();

        let close = inner.find(']').ok_or(DiscardReason::UnparseableReference)?;
        inner
            .get(RFC_MARKER_LEN..close)
            .and_then(|digits| digits.trim().parse::<u32>().ok())
            .ok_or(DiscardReason::NonRfcReference)
    }

    /// Run the name rules. `None` means no rule matched.
    pub fn derive(name: &str) -> Result<Option<Derivation>, GroupsError> {
        match RULES.iter().find(|rule| (rule.matches)(name)) {
            Some(rule) => {
                tracing::trace!("'{}' matched rule '{}'", name, rule.label);
                (rule.derive)(name).map(Some)
            }
            None => Ok(None),
        }
    }

    /// Final color after the strength check. Weak groups are red even if a rule
    /// tagged them green.
    #[must_use]
    pub fn apply_strength_override(color: ColorTag, security_bits: u32) -> ColorTag {
        if security_bits < MIN_SECURITY_BITS {
            ColorTag::Red
        } else {
            color
        }
    }

    /// Classify one record.
    ///
    /// # Errors
    /// Returns `GroupsError::ClassificationError` if the name matched a curve
    /// rule but its size segment is not a number.
    pub fn evaluate(record: &RawRecord) -> Result<Verdict, GroupsError> {
        let Some(id) = Self::parse_id(&record.id) else {
            return Ok(Self::discard(record, DiscardReason::NonNumericId));
        };

        if Self::is_reserved(&record.name) {
            return Ok(Self::discard(record, DiscardReason::ReservedOrUnassigned));
        }

        if let Err(reason) = Self::rfc_number(&record.reference) {
            if reason == DiscardReason::UnparseableReference {
                tracing::warn!(
                    "Can't parse reference at line {}: {}",
                    record.line,
                    record.reference
                );
            }
            return Ok(Self::discard(record, reason));
        }

        let traits = match Self::derive(&record.name)? {
            Some(Derivation::Exclude) => {
                return Ok(Self::discard(record, DiscardReason::ExcludedCategory));
            }
            Some(Derivation::Derived(traits)) => traits,
            None => {
                tracing::debug!(
                    "No rule for '{}' (line {}); keeping with placeholder fields",
                    record.name,
                    record.line
                );
                Traits::placeholder(&record.name)
            }
        };

        Ok(Verdict::Keep(GroupDescriptor {
            id,
            name: traits.display_name,
            security_bits: traits.security_bits,
            color: Self::apply_strength_override(traits.color, traits.security_bits),
            constant: traits.constant,
            kind: traits.kind,
            key_exchange_len: traits.key_exchange_len,
        }))
    }

    /// Classify one record, collapsing discards to `None`.
    pub fn classify(record: &RawRecord) -> Result<Option<GroupDescriptor>, GroupsError> {
        Self::evaluate(record).map(Verdict::into_descriptor)
    }

    fn discard(record: &RawRecord, reason: DiscardReason) -> Verdict {
        tracing::debug!(
            "Discarding line {} ('{}'): {}",
            record.line,
            record.name,
            reason
        );
        Verdict::Discard(reason)
    }
}

// =============================================================================
// TESTS
// =============================================================================
