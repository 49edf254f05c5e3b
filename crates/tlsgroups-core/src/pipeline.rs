//! # Pipeline Module
//!
//! Reader → Classifier → Emitter, strictly forward.
//!
//! The whole registry is classified before anything is written, so a fatal row
//! never leaves a half-written table on the output.

use crate::classifier::{Classifier, Verdict};
use crate::emitter::{EmitOptions, Emitter};
use crate::reader::Registry;
use crate::{DiscardReason, GroupDescriptor, GroupsError, RawRecord};
use std::collections::BTreeMap;
use std::io::Write;

/// Counters for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Records handed to the classifier.
    pub rows: usize,
    /// Records that became descriptors.
    pub retained: usize,
    /// Discards per reason. BTreeMap for deterministic iteration.
    pub discarded: BTreeMap<DiscardReason, usize>,
}

impl RunSummary {
    /// Total number of discarded rows.
    #[must_use]
    pub fn discarded_total(&self) -> usize {
        self.discarded.values().sum()
    }

    fn record(&mut self, verdict: &Verdict) {
        self.rows += 1;
        match verdict {
            Verdict::Keep(_) => self.retained += 1,
            Verdict::Discard(reason) => {
                *self.discarded.entry(*reason).or_insert(0) += 1;
            }
        }
    }
}

/// Descriptors in registry order, plus the run counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generated {
    pub descriptors: Vec<GroupDescriptor>,
    pub summary: RunSummary,
}

/// Stateless driver for the three stages.
pub struct Pipeline;

impl Pipeline {
    /// Classify a sequence of records, stopping at the first error.
    pub fn collect<I>(records: I) -> Result<Generated, GroupsError>
    where
        I: IntoIterator<Item = Result<RawRecord, GroupsError>>,
    {
        let mut generated = Generated::default();

        for record in records {
            let verdict = Classifier::evaluate(&record?)?;
            generated.summary.record(&verdict);
            if let Verdict::Keep(descriptor) = verdict {
                generated.descriptors.push(descriptor);
            }
        }

        Ok(generated)
    }

    /// Read and classify a registry file.
    pub fn run(registry: &Registry) -> Result<Generated, GroupsError> {
        tracing::debug!("Reading registry {}", registry.path().display());
        Self::collect(registry.rows()?)
    }

    /// Read, classify and write the table. Returns the run counters.
    pub fn generate<W: Write>(
        registry: &Registry,
        options: &EmitOptions,
        out: &mut W,
    ) -> Result<RunSummary, GroupsError> {
        let generated = Self::run(registry)?;
        Emitter::emit(out, options, &generated.descriptors)?;
        Ok(generated.summary)
    }
}

// =============================================================================
// TESTS
// =============================================================================
