//! # Static Tables
//!
//! Hardcoded constants and lookup tables for the classifier and reader.
//!
//! These are compiled into the binary and are immutable at runtime.

// =============================================================================
// REGISTRY LAYOUT
// =============================================================================

/// Column holding the numeric identifier.
pub const ID_COLUMN: usize = 0;

/// Column holding the group name ("Description").
pub const NAME_COLUMN: usize = 1;

/// Column holding the reference (`[RFC8422]`).
pub const REFERENCE_COLUMN: usize = 4;

/// Minimum number of columns a row must carry.
pub const REQUIRED_COLUMNS: usize = REFERENCE_COLUMN + 1;

/// Where the registry can be downloaded in CSV form.
pub const REGISTRY_URL: &str = "https://www.iana.org/assignments/tls-parameters/tls-parameters-8.csv";

// =============================================================================
// STRENGTH
// =============================================================================

/// Groups weaker than this many bits are tagged red.
pub const MIN_SECURITY_BITS: u32 = 112;

/// Length of the `RFC` marker skipped inside a reference bracket.
pub const RFC_MARKER_LEN: usize = 3;

// =============================================================================
// NAME RULES
// =============================================================================

/// Prefix of the SEC 2 curves (`secp256r1`, `sect571k1`).
pub const SEC_PREFIX: &str = "sec";

/// Characters skipped before the SEC digit run (`secp` / `sect`).
pub const SEC_DIGITS_OFFSET: usize = 4;

/// Prefix of the Brainpool curves.
pub const BRAINPOOL_PREFIX: &str = "brainpoolP";

/// Prefix of the RFC 7919 finite-field groups.
pub const FFDHE_PREFIX: &str = "ffdhe";

/// Prefix of the explicit-parameter pseudo groups, never emitted.
pub const ARBITRARY_PREFIX: &str = "arbitrary_";

/// Trailing marker of the RFC 8734 Brainpool TLS 1.3 code points.
pub const TLS13_MARKER: &str = "tls13";

/// Length of the curve-type suffix (`r1`, `k1`, `t1`).
pub const CURVE_SUFFIX_LEN: usize = 2;

/// Names that mean "no group here".
pub const RESERVED_NAMES: [&str; 2] = ["Reserved", "Unassigned"];

/// SEC curves whose OpenSSL NID is the X9.62 alias rather than `NID_<name>`.
pub const SEC_NID_ALIASES: &[(&str, &str)] = &[
    ("secp192r1", "NID_X9_62_prime192v1"),
    ("secp256r1", "NID_X9_62_prime256v1"),
];

/// SEC curves that are also the NIST prime curves.
pub const NIST_ALIASES: &[(&str, &str)] = &[
    ("secp256r1", "NIST P-256"),
    ("secp384r1", "NIST P-384"),
    ("secp521r1", "NIST P-521"),
];

/// SEC curves tagged green regardless of their category default.
pub const SEC_GREEN: &[&str] = &["secp256k1"];

/// Montgomery curves: `(name, security bits, key exchange length in bytes)`.
pub const MONTGOMERY_CURVES: &[(&str, u32, u32)] = &[("x25519", 128, 32), ("x448", 224, 56)];

/// Finite-field groups: `(name, security bits, key exchange length in bytes)`.
///
/// 2048 and 3072 are from NIST SP 800-57 pt.1 rev4 p.53; 4096, 6144 and 8192
/// are estimated from the same document.
pub const FFDHE_GROUPS: &[(&str, u32, u32)] = &[
    ("ffdhe2048", 112, 256),
    ("ffdhe3072", 128, 384),
    ("ffdhe4096", 150, 512),
    ("ffdhe6144", 175, 768),
    ("ffdhe8192", 192, 1024),
];

/// Look up a name in one of the `(name, value)` tables above.
#[must_use]
pub fn lookup<'a>(table: &[(&str, &'a str)], name: &str) -> Option<&'a str> {
    table.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
}

/// Look up a name in one of the `(name, bits, length)` tables above.
#[must_use]
pub fn lookup_strength(table: &[(&str, u32, u32)], name: &str) -> Option<(u32, u32)> {
    table
        .iter()
        .find(|(n, _, _)| *n == name)
        .map(|(_, bits, len)| (*bits, *len))
}
