//! Shared data models: the rule table schema and the validation outcome.

pub mod rules;

use crate::error::CheckError;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Counts used by printers.
pub struct Summary {
    pub structure: usize,
    pub configuration: usize,
    pub infos: usize,
    pub entries: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Result of one validation pass.
pub struct ValidationOutcome {
    /// Diagnostics from required entries, in declared-entry order.
    pub violations: Vec<CheckError>,
    /// Failures of optional entries; never affect `passed`.
    pub infos: Vec<CheckError>,
    pub passed: bool,
    pub summary: Summary,
}

impl ValidationOutcome {
    pub fn new(violations: Vec<CheckError>, infos: Vec<CheckError>, entries: usize) -> Self {
        let configuration = violations.iter().filter(|v| v.is_configuration()).count();
        let summary = Summary {
            structure: violations.len() - configuration,
            configuration,
            infos: infos.len(),
            entries,
        };
        ValidationOutcome {
            passed: violations.is_empty(),
            violations,
            infos,
            summary,
        }
    }
}
