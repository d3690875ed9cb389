//! Checkers for each rule kind and the per-entry dispatcher.

pub mod alternatives;
pub mod path;
pub mod pattern;

use crate::error::CheckError;
use crate::models::rules::{CheckKind, RuleEntry, RuleTable};
use std::path::Path;

/// Run the check declared by `entry` and return its diagnostics.
///
/// An empty result means the entry is satisfied. Diagnostics keep the order
/// the checker produced them in.
pub fn run_entry(root: &Path, table: &RuleTable, entry: &RuleEntry) -> Vec<CheckError> {
    if entry.target.trim().is_empty() {
        return vec![CheckError::configuration(
            &entry.target,
            format!("rule entry of kind '{}' has an empty target", entry.kind),
        )];
    }
    let kind = match path::parse_kind(&entry.target, &entry.kind) {
        Ok(kind) => kind,
        Err(e) => return vec![e],
    };
    let result = match kind {
        CheckKind::File | CheckKind::Directory | CheckKind::NonEmptyDirectory => {
            path::check_path(root, &entry.target, kind).map_err(|e| vec![e])
        }
        CheckKind::PatternFolder => pattern::check_pattern(
            root,
            &entry.target,
            table.pattern_files.get(&entry.target).map(Vec::as_slice),
        ),
        CheckKind::FileOrFolder => alternatives::check_alternatives(
            root,
            &entry.target,
            table.alternatives.get(&entry.target).map(Vec::as_slice),
        )
        .map_err(|e| vec![e]),
    };
    result.err().unwrap_or_default()
}
