//! Existence checks for plain files and directories.

use crate::error::CheckError;
use crate::models::rules::CheckKind;
use std::fs;
use std::path::Path;

/// Parse an entry's kind label, attributing failures to `target`.
pub fn parse_kind(target: &str, label: &str) -> Result<CheckKind, CheckError> {
    label.parse::<CheckKind>().map_err(|_| {
        CheckError::configuration(
            target,
            format!("unknown check kind '{}' for target '{}'", label, target),
        )
    })
}

/// Check `target` (relative to `root`) against a simple kind.
///
/// - `File`: an existing regular file.
/// - `Directory`: an existing directory, empty or not.
/// - `NonEmptyDirectory`: a directory with at least one entry; dotfiles count.
///
/// Composite kinds are not path checks and yield a configuration error.
pub fn check_path(root: &Path, target: &str, kind: CheckKind) -> Result<(), CheckError> {
    if target.trim().is_empty() {
        return Err(CheckError::configuration(
            target,
            format!("empty target for check kind '{}'", kind),
        ));
    }
    let path = root.join(target);
    match kind {
        CheckKind::File => {
            if path.is_file() {
                Ok(())
            } else if path.exists() {
                Err(CheckError::structure(
                    target,
                    format!("expected a file but found something else: {}", target),
                ))
            } else {
                Err(CheckError::structure(
                    target,
                    format!("required file not found: {}", target),
                ))
            }
        }
        CheckKind::Directory => {
            if path.is_dir() {
                Ok(())
            } else if path.exists() {
                Err(CheckError::structure(
                    target,
                    format!("expected a directory but found something else: {}", target),
                ))
            } else {
                Err(CheckError::structure(
                    target,
                    format!("required directory not found: {}", target),
                ))
            }
        }
        CheckKind::NonEmptyDirectory => {
            if !path.is_dir() {
                return Err(CheckError::structure(
                    target,
                    format!("required directory not found: {}", target),
                ));
            }
            match fs::read_dir(&path) {
                Ok(mut entries) => {
                    if entries.next().is_some() {
                        Ok(())
                    } else {
                        Err(CheckError::structure(
                            target,
                            format!("directory must not be empty: {}", target),
                        ))
                    }
                }
                Err(e) => Err(CheckError::structure(
                    target,
                    format!("cannot read directory {}: {}", target, e),
                )),
            }
        }
        CheckKind::PatternFolder | CheckKind::FileOrFolder => Err(CheckError::configuration(
            target,
            format!(
                "check kind '{}' for target '{}' is not a plain path check",
                kind, target
            ),
        )),
    }
}
