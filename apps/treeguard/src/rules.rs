//! Built-in rule table used when no `[rules]` section is configured.
//!
//! The constants describe a project that keeps sources under `src/`, ships a
//! README and `.gitignore`, clones an `r_folder` template per sub-project, and
//! accepts tests either as a single module or as a directory.

use crate::models::rules::{Candidate, CheckKind, RuleEntry, RuleTable, SimpleCheckKind};

pub const REQUIRED: &[(&str, CheckKind)] = &[
    ("./README.md", CheckKind::File),
    ("./.gitignore", CheckKind::File),
    ("./src", CheckKind::NonEmptyDirectory),
    ("./docs", CheckKind::Directory),
    ("./r_folder", CheckKind::PatternFolder),
    ("./tests", CheckKind::FileOrFolder),
];

pub const OPTIONAL: &[(&str, CheckKind)] = &[
    ("./LICENSE", CheckKind::File),
    ("./CHANGELOG.md", CheckKind::File),
];

pub const PATTERN_FILES: &[(&str, &[&str])] = &[("./r_folder", &["README.md", "main.R"])];

pub const ALTERNATIVES: &[(&str, &[(&str, SimpleCheckKind)])] = &[(
    "./tests",
    &[
        ("./tests.py", SimpleCheckKind::File),
        ("./tests", SimpleCheckKind::Directory),
    ],
)];

fn entries(list: &[(&str, CheckKind)]) -> Vec<RuleEntry> {
    list.iter()
        .map(|(target, kind)| RuleEntry::new(*target, *kind))
        .collect()
}

/// Build the owned rule table from the constants above.
pub fn builtin() -> RuleTable {
    RuleTable {
        required: entries(REQUIRED),
        optional: entries(OPTIONAL),
        pattern_files: PATTERN_FILES
            .iter()
            .map(|(prefix, files)| {
                (
                    prefix.to_string(),
                    files.iter().map(|f| f.to_string()).collect(),
                )
            })
            .collect(),
        alternatives: ALTERNATIVES
            .iter()
            .map(|(name, candidates)| {
                (
                    name.to_string(),
                    candidates
                        .iter()
                        .map(|(path, kind)| Candidate::new(*path, *kind))
                        .collect(),
                )
            })
            .collect(),
    }
}
