//! # Emitter Module
//!
//! Renders descriptors as the C block pasted into the scanner source:
//!
//! ```text
//!
//!   /* Auto-generated by <tool> on <date>. */
//! #define COL_PLAIN ""
//! #define NID_TYPE_NA 0    /* Not Applicable (i.e.: X25519/X448) */
//! #define NID_TYPE_ECDHE 1 /* For ECDHE curves (sec*, P-256/384-521) */
//! #define NID_TYPE_DHE 2   /* For ffdhe* */
//!   /* Bit strength of DHE ... */
//!   struct group_key_exchange group_key_exchanges[] = {
//!     {0x001d, "x25519", 128, COL_GREEN, -1, NID_TYPE_NA, 32},
//!   };
//!
//! ```
//!
//! `COL_GREEN` and `COL_RED` are defined by the consuming source, so only the
//! plain marker is emitted here. Names are written between double quotes as-is;
//! registry names carry no quote characters.

use crate::{GroupDescriptor, GroupsError};
use std::io::Write;

/// C type of one table entry.
pub const STRUCT_NAME: &str = "group_key_exchange";

/// C name of the table.
pub const TABLE_NAME: &str = "group_key_exchanges";

/// Header comment fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Tool identity printed in the "Auto-generated by" line.
    pub tool: String,
    /// Generation date, already formatted for humans (`October 18, 2026`).
    pub generated_on: String,
}

impl EmitOptions {
    /// Create options for the given tool and date.
    #[must_use]
    pub fn new(tool: impl Into<String>, generated_on: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            generated_on: generated_on.into(),
        }
    }
}

/// Writes the generated block.
pub struct Emitter;

impl Emitter {
    /// Write the whole block: header, one row per descriptor in the given order, footer.
    pub fn emit<W: Write>(
        out: &mut W,
        options: &EmitOptions,
        descriptors: &[GroupDescriptor],
    ) -> Result<(), GroupsError> {
        Self::write_header(out, options).map_err(write_error)?;
        for descriptor in descriptors {
            Self::write_row(out, descriptor).map_err(write_error)?;
        }
        Self::write_footer(out).map_err(write_error)?;
        out.flush().map_err(write_error)
    }

    /// Render the block into a string.
    pub fn render(
        options: &EmitOptions,
        descriptors: &[GroupDescriptor],
    ) -> Result<String, GroupsError> {
        let mut buf = Vec::new();
        Self::emit(&mut buf, options, descriptors)?;
        String::from_utf8(buf)
            .map_err(|e| GroupsError::IoError(format!("Generated table is not UTF-8: {}", e)))
    }

    /// Format a single table row, without the trailing newline.
    #[must_use]
    pub fn row(d: &GroupDescriptor) -> String {
        format!(
            "    {{{}, \"{}\", {}, {}, {}, {}, {}}},",
            d.id,
            d.name,
            d.security_bits,
            d.color.as_c_symbol(),
            d.constant,
            d.kind_symbol(),
            d.key_exchange_len
        )
    }

    fn write_header<W: Write>(out: &mut W, options: &EmitOptions) -> std::io::Result<()> {
        writeln!(out)?;
        writeln!(
            out,
            "  /* Auto-generated by {} on {}. */",
            options.tool, options.generated_on
        )?;
        writeln!(out, "#define COL_PLAIN \"\"")?;
        writeln!(
            out,
            "#define NID_TYPE_NA 0    /* Not Applicable (i.e.: X25519/X448) */"
        )?;
        writeln!(
            out,
            "#define NID_TYPE_ECDHE 1 /* For ECDHE curves (sec*, P-256/384-521) */"
        )?;
        writeln!(out, "#define NID_TYPE_DHE 2   /* For ffdhe* */")?;
        writeln!(
            out,
            "  /* Bit strength of DHE 2048 and 3072-bit moduli is taken directly from NIST SP 800-57 pt.1, rev4., pg. 53; DHE 4096, 6144, and 8192 are estimated using that document. */"
        )?;
        writeln!(out, "  struct {} {}[] = {{", STRUCT_NAME, TABLE_NAME)
    }

    fn write_row<W: Write>(out: &mut W, descriptor: &GroupDescriptor) -> std::io::Result<()> {
        writeln!(out, "{}", Self::row(descriptor))
    }

    fn write_footer<W: Write>(out: &mut W) -> std::io::Result<()> {
        writeln!(out, "  }};")?;
        writeln!(out)
    }
}

fn write_error(e: std::io::Error) -> GroupsError {
    GroupsError::IoError(format!("Write generated table: {}", e))
}

// =============================================================================
// TESTS
// =============================================================================
