//! Validation runner: evaluates every rule entry and aggregates diagnostics.
//!
//! Entries are independent, so they are checked in parallel; the indexed
//! collect keeps diagnostics in declared-entry order.

use crate::checks::run_entry;
use crate::error::CheckError;
use crate::models::rules::{RuleEntry, RuleTable};
use crate::models::ValidationOutcome;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Validates one repository root against a rule table.
pub struct Validator<'a> {
    root: PathBuf,
    table: &'a RuleTable,
    check_optional: bool,
}

impl<'a> Validator<'a> {
    pub fn new(root: impl Into<PathBuf>, table: &'a RuleTable) -> Self {
        Validator {
            root: root.into(),
            table,
            check_optional: true,
        }
    }

    /// Toggle evaluation of optional entries.
    pub fn check_optional(mut self, enabled: bool) -> Self {
        self.check_optional = enabled;
        self
    }

    /// Run every required entry, then optional ones if enabled.
    ///
    /// `passed` is true iff no required entry produced a diagnostic.
    pub fn validate(&self) -> ValidationOutcome {
        let violations = self.run_all(&self.table.required);
        let infos = if self.check_optional {
            self.run_all(&self.table.optional)
        } else {
            Vec::new()
        };
        ValidationOutcome::new(violations, infos, self.table.required.len())
    }

    fn run_all(&self, entries: &[RuleEntry]) -> Vec<CheckError> {
        let per_entry: Vec<Vec<CheckError>> = entries
            .par_iter()
            .map(|entry| run_entry(&self.root, self.table, entry))
            .collect();
        per_entry.into_iter().flatten().collect()
    }
}

/// Convenience wrapper: validate `root` against `table` including optional entries.
pub fn validate(root: &Path, table: &RuleTable) -> ValidationOutcome {
    Validator::new(root, table).validate()
}
