//! File-or-folder requirements satisfied by any one of several candidates.

use crate::checks::path::check_path;
use crate::error::CheckError;
use crate::models::rules::{Candidate, SimpleCheckKind};
use std::path::Path;

fn typed_candidate(
    name: &str,
    position: usize,
    candidate: &Candidate,
) -> Result<(String, SimpleCheckKind), CheckError> {
    if candidate.path.trim().is_empty() {
        return Err(CheckError::configuration(
            name,
            format!("alternative #{} for '{}' has an empty path", position + 1, name),
        ));
    }
    let label = candidate.kind.as_deref().ok_or_else(|| {
        CheckError::configuration(
            name,
            format!(
                "alternative '{}' for '{}' has no kind",
                candidate.path, name
            ),
        )
    })?;
    let kind = label.parse::<SimpleCheckKind>().map_err(|_| {
        CheckError::configuration(
            name,
            format!(
                "alternative '{}' for '{}' has kind '{}'; expected file or directory",
                candidate.path, name, label
            ),
        )
    })?;
    Ok((candidate.path.clone(), kind))
}

/// Succeed when any candidate declared for `name` exists with its kind.
///
/// `candidates` is `None` when the rule table has no entry for `name`.
/// Malformed candidates are reported before anything is looked up on disk.
pub fn check_alternatives(
    root: &Path,
    name: &str,
    candidates: Option<&[Candidate]>,
) -> Result<(), CheckError> {
    let candidates = candidates.ok_or_else(|| {
        CheckError::configuration(name, format!("no alternatives declared for '{}'", name))
    })?;
    if candidates.is_empty() {
        return Err(CheckError::configuration(
            name,
            format!("alternative list for '{}' is empty", name),
        ));
    }
    let typed = candidates
        .iter()
        .enumerate()
        .map(|(i, c)| typed_candidate(name, i, c))
        .collect::<Result<Vec<_>, _>>()?;

    if typed
        .iter()
        .any(|(path, kind)| check_path(root, path, (*kind).into()).is_ok())
    {
        return Ok(());
    }
    let tried = typed
        .iter()
        .map(|(path, kind)| format!("{} ({})", path, kind))
        .collect::<Vec<_>>()
        .join(", ");
    Err(CheckError::structure(
        name,
        format!("none of the alternatives for '{}' exist; tried {}", name, tried),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn a_candidates() -> Vec<Candidate> {
        vec![
            Candidate::new("./a.py", SimpleCheckKind::File),
            Candidate::new("./a", SimpleCheckKind::Directory),
        ]
    }

    #[test]
    fn test_no_candidate_present_lists_all_tried() {
        let dir = tempdir().unwrap();
        let err = check_alternatives(dir.path(), "./a", Some(a_candidates().as_slice())).unwrap_err();
        assert!(!err.is_configuration());
        assert_eq!(
            err.message(),
            "none of the alternatives for './a' exist; tried ./a.py (file), ./a (directory)"
        );
    }

    #[test]
    fn test_any_satisfied_candidate_passes() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("a")).unwrap();
        assert!(check_alternatives(dir.path(), "./a", Some(a_candidates().as_slice())).is_ok());

        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.py"), "print()").unwrap();
        assert!(check_alternatives(dir.path(), "./a", Some(a_candidates().as_slice())).is_ok());
    }

    #[test]
    fn test_kind_mismatch_does_not_satisfy() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a"), "a file, not a dir").unwrap();
        assert!(check_alternatives(dir.path(), "./a", Some(a_candidates().as_slice())).is_err());
    }

    #[test]
    fn test_missing_or_malformed_sets_are_configuration_errors() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir(root.join("a")).unwrap();

        let err = check_alternatives(root, "./a", None).unwrap_err();
        assert!(err.is_configuration());
        assert!(check_alternatives(root, "./a", Some(&[][..])).unwrap_err().is_configuration());

        let empty_path = vec![Candidate::new("", SimpleCheckKind::File)];
        let err = check_alternatives(root, "./a", Some(empty_path.as_slice())).unwrap_err();
        assert_eq!(err.message(), "alternative #1 for './a' has an empty path");

        // A later malformed candidate is reported even though an earlier one exists.
        let unset = vec![
            Candidate::new("./a", SimpleCheckKind::Directory),
            Candidate {
                path: "./a.py".into(),
                kind: None,
            },
        ];
        let err = check_alternatives(root, "./a", Some(unset.as_slice())).unwrap_err();
        assert!(err.is_configuration());

        let composite = vec![Candidate {
            path: "./a".into(),
            kind: Some("pattern_folder".into()),
        }];
        let err = check_alternatives(root, "./a", Some(composite.as_slice())).unwrap_err();
        assert!(err.message().contains("expected file or directory"));
    }
}
