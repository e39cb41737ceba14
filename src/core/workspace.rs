//! Working-directory probes
//!
//! Read-only checks that run before any side effect: whether a path exists,
//! what the current directory is called, and which entries it contains.

use std::env;
use std::fs;
use std::path::Path;

use crate::error::{GitliftError, Result};

/// Check whether a path exists on disk (file or directory).
///
/// Never errors for a missing path.
pub fn directory_exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().exists()
}

/// The final segment of the process working directory.
///
/// Used as the default repository name suggestion.
pub fn current_directory_name() -> Result<String> {
    let cwd = env::current_dir()?;
    base_name(&cwd).ok_or_else(|| {
        GitliftError::InvalidInput(
            "Cannot derive a repository name from the current directory".to_string(),
        )
    })
}

fn base_name(path: &Path) -> Option<String> {
    path.file_name().map(|name| name.to_string_lossy().into_owned())
}

/// Top-level entries of `dir`, offered as ignore-file candidates.
///
/// `.git` and `.gitignore` are never offered.
pub fn visible_entries<P: AsRef<Path>>(dir: P) -> Result<Vec<String>> {
    let mut entries = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name != ".git" && name != ".gitignore" {
            entries.push(name);
        }
    }

    entries.sort();
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_directory_exists() {
        let dir = tempfile::tempdir().unwrap();
        assert!(directory_exists(dir.path()));
        assert!(!directory_exists(dir.path().join("missing")));

        let file = dir.path().join("plain-file");
        fs::write(&file, "contents").unwrap();
        assert!(directory_exists(&file));
    }

    #[test]
    fn test_base_name() {
        assert_eq!(
            base_name(&PathBuf::from("/home/user/my-project")),
            Some("my-project".to_string())
        );
        assert_eq!(base_name(&PathBuf::from("/")), None);
    }

    #[test]
    fn test_visible_entries_filters_git_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::write(dir.path().join(".gitignore"), "").unwrap();
        fs::write(dir.path().join("README.md"), "").unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();

        let entries = visible_entries(dir.path()).unwrap();
        assert_eq!(entries, vec!["README.md".to_string(), "src".to_string()]);
    }

    #[test]
    fn test_visible_entries_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(visible_entries(dir.path()).unwrap().is_empty());
    }
}
