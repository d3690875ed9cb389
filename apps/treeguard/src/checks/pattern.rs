//! Pattern-folder checks.
//!
//! A pattern folder is a directory named by a fixed prefix, optionally with a
//! variant suffix (`./r_folder`, `./r_folder_2`, ...). Every variant must carry
//! the same required files, and a lone folder must use the bare prefix name.
//!
//! The check runs in three steps: [`discover`] the matching directories,
//! [`classify`] how many there are, then [`verify_contents`] of each one.
//! With two or more variants no naming rule is applied.

use crate::error::CheckError;
use glob::Pattern;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
/// How many directories matched a prefix, and whether a lone one is canonical.
pub enum Arity {
    Empty,
    /// Exactly one folder, named exactly as the prefix.
    Canonical,
    /// Exactly one folder carrying a suffix; holds its name.
    Renamed(String),
    Many(usize),
}

/// Base name of the prefix, i.e. the folder-name part that entries must start with.
fn prefix_base(prefix: &str) -> Result<&str, CheckError> {
    Path::new(prefix)
        .file_name()
        .and_then(|s| s.to_str())
        .ok_or_else(|| {
            CheckError::configuration(
                prefix,
                format!("pattern prefix '{}' does not end in a folder name", prefix),
            )
        })
}

/// Display path of a matched folder, spelled the way the prefix is spelled.
pub fn folder_path(prefix: &str, name: &str) -> String {
    Path::new(prefix)
        .with_file_name(name)
        .to_string_lossy()
        .to_string()
}

/// List directory names next to `prefix` that start with its base name.
///
/// Non-directory matches and names that are not valid UTF-8 are dropped.
/// Names are sorted for stable output. A missing parent directory yields no
/// matches; any other read failure is a structure diagnostic.
pub fn discover(root: &Path, prefix: &str) -> Result<Vec<String>, CheckError> {
    let base = prefix_base(prefix)?;
    let pattern = Pattern::new(&format!("{}*", Pattern::escape(base))).map_err(|e| {
        CheckError::configuration(prefix, format!("invalid pattern prefix '{}': {}", prefix, e))
    })?;
    let parent = Path::new(prefix).parent().unwrap_or_else(|| Path::new(""));
    let dir = root.join(parent);
    let entries = match fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(CheckError::structure(
                prefix,
                format!("cannot read directory {}: {}", dir.to_string_lossy(), e),
            ))
        }
    };
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            CheckError::structure(
                prefix,
                format!("cannot read an entry of {}: {}", dir.to_string_lossy(), e),
            )
        })?;
        // Non-UTF-8 names cannot be spelled in rule targets
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if pattern.matches(&name) && entry.path().is_dir() {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

/// Classify discovered folder names against the prefix's base name.
pub fn classify(base: &str, names: &[String]) -> Arity {
    match names {
        [] => Arity::Empty,
        [only] if only == base => Arity::Canonical,
        [only] => Arity::Renamed(only.clone()),
        many => Arity::Many(many.len()),
    }
}

/// Report every required file missing from every matched folder.
pub fn verify_contents(
    root: &Path,
    prefix: &str,
    names: &[String],
    required_files: &[String],
) -> Vec<CheckError> {
    let mut missing = Vec::new();
    for name in names {
        let folder = folder_path(prefix, name);
        for file in required_files {
            let rel = Path::new(&folder).join(file);
            if !root.join(&rel).is_file() {
                missing.push(CheckError::structure(
                    prefix,
                    format!("missing required file: {}", rel.to_string_lossy()),
                ));
            }
        }
    }
    missing
}

/// Check a pattern-folder entry against its required-file list.
///
/// `required_files` is `None` when the rule table declares no list for this
/// prefix, which is a configuration error.
pub fn check_pattern(
    root: &Path,
    prefix: &str,
    required_files: Option<&[String]>,
) -> Result<(), Vec<CheckError>> {
    let required_files = required_files.ok_or_else(|| {
        vec![CheckError::configuration(
            prefix,
            format!("no required-file list declared for pattern folder '{}'", prefix),
        )]
    })?;
    if required_files.iter().any(|f| f.trim().is_empty()) {
        return Err(vec![CheckError::configuration(
            prefix,
            format!("required-file list for pattern folder '{}' has an empty name", prefix),
        )]);
    }
    let base = prefix_base(prefix).map_err(|e| vec![e])?;
    let names = discover(root, prefix).map_err(|e| vec![e])?;

    let mut errors = Vec::new();
    match classify(base, &names) {
        Arity::Empty => {
            return Err(vec![CheckError::structure(
                prefix,
                format!("no directories found matching pattern '{}*'", prefix),
            )]);
        }
        Arity::Renamed(name) => errors.push(CheckError::structure(
            prefix,
            format!(
                "found only '{}'; the single existing folder must be named exactly '{}'",
                folder_path(prefix, &name),
                prefix
            ),
        )),
        Arity::Canonical | Arity::Many(_) => {}
    }
    errors.extend(verify_contents(root, prefix, &names, required_files));
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
