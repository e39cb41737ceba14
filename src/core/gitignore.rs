//! .gitignore creation
//!
//! The selected patterns are written one per line into the working
//! directory. An existing file is overwritten silently.

use std::fs;
use std::path::Path;

use crate::error::Result;

/// File name written into the working directory
pub const GITIGNORE_FILE: &str = ".gitignore";

/// Entry names preselected when offered as ignore candidates
const KNOWN_JUNK: &[&str] = &[
    "node_modules",
    "target",
    "dist",
    "build",
    ".DS_Store",
    ".env",
    ".idea",
    ".vscode",
];

/// True for entries that should be suggested as ignored by default
pub fn is_known_junk(name: &str) -> bool {
    KNOWN_JUNK.contains(&name)
}

/// Write the selected patterns to `.gitignore`, one per line
///
/// An empty selection still creates the (empty) file.
pub fn write_gitignore<P: AsRef<Path>>(dir: P, patterns: &[String]) -> Result<()> {
    let path = dir.as_ref().join(GITIGNORE_FILE);

    let mut contents = patterns.join("\n");
    if !contents.is_empty() {
        contents.push('\n');
    }

    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_patterns_one_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let patterns = vec!["node_modules".to_string(), "*.log".to_string()];

        write_gitignore(dir.path(), &patterns).unwrap();

        let contents = fs::read_to_string(dir.path().join(GITIGNORE_FILE)).unwrap();
        assert_eq!(contents, "node_modules\n*.log\n");
    }

    #[test]
    fn test_empty_selection_creates_empty_file() {
        let dir = tempfile::tempdir().unwrap();

        write_gitignore(dir.path(), &[]).unwrap();

        let contents = fs::read_to_string(dir.path().join(GITIGNORE_FILE)).unwrap();
        assert!(contents.is_empty());
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(GITIGNORE_FILE), "old contents\n").unwrap();

        write_gitignore(dir.path(), &["target".to_string()]).unwrap();

        let contents = fs::read_to_string(dir.path().join(GITIGNORE_FILE)).unwrap();
        assert_eq!(contents, "target\n");
    }

    #[test]
    fn test_known_junk() {
        assert!(is_known_junk("node_modules"));
        assert!(is_known_junk("target"));
        assert!(!is_known_junk("src"));
    }
}
