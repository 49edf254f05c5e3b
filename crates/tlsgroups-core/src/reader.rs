//! # Row Reader
//!
//! Turns the registry CSV into an ordered, lazy sequence of [`RawRecord`]s.
//!
//! - Fields are split with RFC 4180 quoting (`"..."`, doubled `""`, quoted newlines)
//! - Only columns 0, 1 and 4 are kept; everything else is ignored
//! - No header skipping: the classifier drops non-numeric ids
//! - Physically empty lines are not records
//!
//! A [`Registry`] reopens its file for every call to [`Registry::rows`], so the
//! sequence can always be restarted from the top. The file handle lives inside
//! the returned [`Rows`] and is released when it is dropped.

use crate::primitives::{ID_COLUMN, NAME_COLUMN, REFERENCE_COLUMN, REQUIRED_COLUMNS};
use crate::{GroupsError, RawRecord};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

// =============================================================================
// POLICY
// =============================================================================

/// What to do with a row that has fewer than [`REQUIRED_COLUMNS`] columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowPolicy {
    /// Fail with `GroupsError::MalformedRow`.
    #[default]
    Strict,
    /// Log a warning and move on to the next row.
    Skip,
}

// =============================================================================
// REGISTRY HANDLE
// =============================================================================

/// A registry file on disk.
#[derive(Debug, Clone)]
pub struct Registry {
    path: PathBuf,
    policy: RowPolicy,
}

impl Registry {
    /// Validate the path and remember it.
    ///
    /// The path must exist and be a regular file. Nothing is read yet.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, GroupsError> {
        let path = path.as_ref();
        let canonical = path.canonicalize().map_err(|e| {
            GroupsError::IoError(format!("Cannot open registry '{}': {}", path.display(), e))
        })?;

        if !canonical.is_file() {
            return Err(GroupsError::IoError(format!(
                "Registry '{}' is not a regular file",
                path.display()
            )));
        }

        Ok(Self {
            path: canonical,
            policy: RowPolicy::default(),
        })
    }

    /// Set the malformed-row policy.
    #[must_use]
    pub fn with_policy(mut self, policy: RowPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The canonical path of the registry file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The malformed-row policy in effect.
    #[must_use]
    pub fn policy(&self) -> RowPolicy {
        self.policy
    }

    /// Start a fresh pass over the file.
    pub fn rows(&self) -> Result<Rows<BufReader<File>>, GroupsError> {
        let file = File::open(&self.path).map_err(|e| {
            GroupsError::IoError(format!(
                "Cannot open registry '{}': {}",
                self.path.display(),
                e
            ))
        })?;
        Ok(Rows::new(BufReader::new(file), self.policy))
    }
}

// =============================================================================
// ROW ITERATOR
// =============================================================================

/// Lazy iterator over the records of any buffered source.
pub struct Rows<R> {
    source: R,
    policy: RowPolicy,
    line: usize,
    finished: bool,
}

impl<R: BufRead> Rows<R> {
    /// Wrap a buffered source.
    pub fn new(source: R, policy: RowPolicy) -> Self {
        Self {
            source,
            policy,
            line: 0,
            finished: false,
        }
    }

    /// Read one logical CSV record, which may span several physical lines.
    ///
    /// Returns the starting line number and the split fields, or `None` at end of input.
    /// Each physical line is scanned once; the scanner keeps its quote state between lines.
    fn next_fields(&mut self) -> Result<Option<(usize, Vec<String>)>, GroupsError> {
        let mut line = String::new();
        loop {
            line.clear();
            if !self.read_line(&mut line)? {
                return Ok(None);
            }
            let start = self.line;

            let mut scanner = FieldScanner::default();
            scanner.feed(&line);
            while scanner.is_open() {
                // Unbalanced quote: the field continues on the next line.
                line.clear();
                if !self.read_line(&mut line)? {
                    tracing::warn!("Unterminated quoted field starting at line {}", start);
                    break;
                }
                scanner.feed(&line);
            }

            let fields = scanner.finish();
            if fields.len() == 1 && fields[0].is_empty() {
                continue;
            }
            return Ok(Some((start, fields)));
        }
    }

    /// Append the next physical line to `buf`. Returns `false` at end of input.
    fn read_line(&mut self, buf: &mut String) -> Result<bool, GroupsError> {
        let read = self.source.read_line(buf).map_err(|e| {
            GroupsError::IoError(format!("Read registry at line {}: {}", self.line + 1, e))
        })?;
        if read == 0 {
            return Ok(false);
        }
        self.line += 1;
        Ok(true)
    }
}

impl<R: BufRead> Iterator for Rows<R> {
    type Item = Result<RawRecord, GroupsError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let (line, mut fields) = match self.next_fields() {
                Ok(Some(record)) => record,
                Ok(None) => {
                    self.finished = true;
                    return None;
                }
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            };

            if fields.len() < REQUIRED_COLUMNS {
                match self.policy {
                    RowPolicy::Strict => {
                        self.finished = true;
                        return Some(Err(GroupsError::MalformedRow {
                            line,
                            found: fields.len(),
                            required: REQUIRED_COLUMNS,
                        }));
                    }
                    RowPolicy::Skip => {
                        tracing::warn!(
                            "Skipping line {}: {} columns, need at least {}",
                            line,
                            fields.len(),
                            REQUIRED_COLUMNS
                        );
                        continue;
                    }
                }
            }

            let reference = std::mem::take(&mut fields[REFERENCE_COLUMN]);
            let name = std::mem::take(&mut fields[NAME_COLUMN]);
            let id = std::mem::take(&mut fields[ID_COLUMN]);
            return Some(Ok(RawRecord::new(id, name, reference).at_line(line)));
        }
    }
}

// =============================================================================
// FIELD SPLITTING
// =============================================================================

/// Drop the trailing `\n` / `\r\n` of a record.
fn trim_terminator(text: &str) -> &str {
    let text = text.strip_suffix('\n').unwrap_or(text);
    text.strip_suffix('\r').unwrap_or(text)
}

/// Incremental RFC 4180 field splitter.
///
/// Physical lines are fed in order. A line terminator inside an open quoted
/// field belongs to the field; outside one it ends the record.
#[derive(Debug, Default)]
struct FieldScanner {
    fields: Vec<String>,
    field: String,
    in_quotes: bool,
}

impl FieldScanner {
    /// Scan one physical line, terminator included.
    fn feed(&mut self, line: &str) {
        let body = trim_terminator(line);
        let mut chars = body.chars().peekable();

        while let Some(c) = chars.next() {
            if self.in_quotes {
                if c == '"' {
                    if chars.peek() == Some(&'"') {
                        self.field.push('"');
                        chars.next();
                    } else {
                        self.in_quotes = false;
                    }
                } else {
                    self.field.push(c);
                }
                continue;
            }

            match c {
                ',' => self.fields.push(std::mem::take(&mut self.field)),
                // A quote only opens a quoted field at the start of the field.
                '"' if self.field.is_empty() => self.in_quotes = true,
                _ => self.field.push(c),
            }
        }

        if self.in_quotes {
            self.field.push_str(&line[body.len()..]);
        }
    }

    /// True while a quoted field is still open.
    fn is_open(&self) -> bool {
        self.in_quotes
    }

    /// The fields read so far. An open quoted field keeps what was read.
    fn finish(mut self) -> Vec<String> {
        if self.in_quotes {
            let kept = trim_terminator(&self.field).len();
            self.field.truncate(kept);
        }
        self.fields.push(self.field);
        self.fields
    }
}

// =============================================================================
// TESTS
// =============================================================================
