//! Rule table schema: required/optional entries plus the lookup tables used
//! by pattern-folder and file-or-folder checks.
//!
//! Kinds are stored as labels and parsed into [`CheckKind`] when an entry is
//! dispatched, so a misspelled kind only breaks its own entry.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
/// Complete rule configuration handed to the validator.
pub struct RuleTable {
    #[serde(default)]
    pub required: Vec<RuleEntry>,
    #[serde(default)]
    pub optional: Vec<RuleEntry>,
    /// Pattern-folder prefix -> file base names every matching folder must hold.
    #[serde(default)]
    pub pattern_files: BTreeMap<String, Vec<String>>,
    /// Logical name -> acceptable candidates, tried in order.
    #[serde(default)]
    pub alternatives: BTreeMap<String, Vec<Candidate>>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
/// A path (or path prefix) and the kind of check applied to it.
pub struct RuleEntry {
    pub target: String,
    pub kind: String,
}

impl RuleEntry {
    pub fn new(target: impl Into<String>, kind: CheckKind) -> Self {
        RuleEntry {
            target: target.into(),
            kind: kind.as_str().to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
/// One acceptable way to satisfy a file-or-folder requirement.
pub struct Candidate {
    #[serde(default)]
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Candidate {
    pub fn new(path: impl Into<String>, kind: SimpleCheckKind) -> Self {
        Candidate {
            path: path.into(),
            kind: Some(kind.as_str().to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Closed set of checks an entry can request.
pub enum CheckKind {
    File,
    Directory,
    NonEmptyDirectory,
    PatternFolder,
    FileOrFolder,
}

impl CheckKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CheckKind::File => "file",
            CheckKind::Directory => "directory",
            CheckKind::NonEmptyDirectory => "non_empty_directory",
            CheckKind::PatternFolder => "pattern_folder",
            CheckKind::FileOrFolder => "file_or_folder",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Returned when a kind label names no known check.
pub struct UnknownKind(pub String);

fn normalize(label: &str) -> String {
    label.trim().to_ascii_lowercase().replace('-', "_")
}

impl FromStr for CheckKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "file" => Ok(CheckKind::File),
            "directory" | "dir" => Ok(CheckKind::Directory),
            "non_empty_directory" | "non_empty_dir" => Ok(CheckKind::NonEmptyDirectory),
            "pattern_folder" => Ok(CheckKind::PatternFolder),
            "file_or_folder" => Ok(CheckKind::FileOrFolder),
            _ => Err(UnknownKind(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Kinds allowed for alternative candidates.
pub enum SimpleCheckKind {
    File,
    Directory,
}

impl SimpleCheckKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SimpleCheckKind::File => "file",
            SimpleCheckKind::Directory => "directory",
        }
    }
}

impl From<SimpleCheckKind> for CheckKind {
    fn from(k: SimpleCheckKind) -> Self {
        match k {
            SimpleCheckKind::File => CheckKind::File,
            SimpleCheckKind::Directory => CheckKind::Directory,
        }
    }
}

impl fmt::Display for SimpleCheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SimpleCheckKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<CheckKind>()? {
            CheckKind::File => Ok(SimpleCheckKind::File),
            CheckKind::Directory => Ok(SimpleCheckKind::Directory),
            _ => Err(UnknownKind(s.to_string())),
        }
    }
}
