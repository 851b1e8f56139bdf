use std::path::PathBuf;
use tracing::debug;

use crate::error::{ConvertError, Result};

/// Returns the first candidate that exists on disk.
pub fn find_input_file(candidates: &[PathBuf]) -> Result<PathBuf> {
    for candidate in candidates {
        if candidate.exists() {
            return Ok(candidate.clone());
        }
        debug!("Input candidate not present: {}", candidate.display());
    }
    Err(ConvertError::InputNotFound {
        candidates: candidates.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn picks_first_existing_candidate() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("a.csv");
        let second = dir.path().join("a.cvs");
        fs::write(&first, "x\n").unwrap();
        fs::write(&second, "x\n").unwrap();

        let found = find_input_file(&[first.clone(), second]).unwrap();
        assert_eq!(found, first);
    }

    #[test]
    fn falls_back_to_later_candidate() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("a.csv");
        let second = dir.path().join("a.cvs");
        fs::write(&second, "x\n").unwrap();

        let found = find_input_file(&[first, second.clone()]).unwrap();
        assert_eq!(found, second);
    }

    #[test]
    fn reports_all_candidates_when_none_exist() {
        let dir = TempDir::new().unwrap();
        let candidates = vec![dir.path().join("a.csv"), dir.path().join("a.cvs")];

        match find_input_file(&candidates) {
            Err(ConvertError::InputNotFound { candidates: listed }) => {
                assert_eq!(listed, candidates);
            }
            other => panic!("expected InputNotFound, got {:?}", other),
        }
    }
}
