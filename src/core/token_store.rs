//! Persistent token storage
//!
//! A single-key TOML file in the per-user configuration directory. The
//! token is minted once, persisted here, and reused on subsequent runs.
//!
//! ## Environment Variable Fallback
//!
//! For development and CI, `GITHUB_TOKEN` overrides the stored value.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::error::{GitliftError, Result};

const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// On-disk shape of the store file
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    /// GitHub personal access token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    github_token: Option<String>,
}

/// Key-value store holding the GitHub token across runs
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Open the store at the per-user configuration location
    pub fn open() -> Result<Self> {
        let project_dirs = ProjectDirs::from("com", "gitlift", "gitlift").ok_or_else(|| {
            GitliftError::StoreUnavailable("Could not determine config directory".into())
        })?;

        Ok(Self {
            path: project_dirs.config_dir().join("credentials.toml"),
        })
    }

    /// Open a store backed by an explicit file path
    pub fn at<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// The stored token, or `None` if never set
    ///
    /// Priority: environment variable > store file.
    pub fn token(&self) -> Result<Option<SecretString>> {
        if let Ok(token) = std::env::var(GITHUB_TOKEN_ENV) {
            if !token.is_empty() {
                return Ok(Some(SecretString::from(token)));
            }
        }

        Ok(self.read()?.github_token.map(SecretString::from))
    }

    /// Persist the token under the fixed key for future invocations
    pub fn set_token(&self, token: &SecretString) -> Result<()> {
        let mut file = self.read()?;
        file.github_token = Some(token.expose_secret().to_string());
        self.write(&file)
    }

    fn read(&self) -> Result<StoreFile> {
        if !self.path.exists() {
            return Ok(StoreFile::default());
        }

        let contents = fs::read_to_string(&self.path)
            .map_err(|e| GitliftError::StoreUnavailable(e.to_string()))?;
        Ok(toml::from_str(&contents)?)
    }

    fn write(&self, file: &StoreFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| GitliftError::StoreUnavailable(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(file)?;
        fs::write(&self.path, contents).map_err(|e| GitliftError::StoreUnavailable(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reads_none() {
        std::env::remove_var(GITHUB_TOKEN_ENV);

        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::at(dir.path().join("credentials.toml"));
        assert!(store.token().unwrap().is_none());
    }

    #[test]
    fn test_stores_and_reads_token() {
        std::env::remove_var(GITHUB_TOKEN_ENV);

        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::at(dir.path().join("nested").join("credentials.toml"));

        store
            .set_token(&SecretString::from("ghp_example".to_string()))
            .unwrap();

        let token = store.token().unwrap().expect("token should be stored");
        assert_eq!(token.expose_secret(), "ghp_example");
    }

    #[test]
    fn test_overwrites_existing_token() {
        std::env::remove_var(GITHUB_TOKEN_ENV);

        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::at(dir.path().join("credentials.toml"));

        store
            .set_token(&SecretString::from("first".to_string()))
            .unwrap();
        store
            .set_token(&SecretString::from("second".to_string()))
            .unwrap();

        let token = store.token().unwrap().unwrap();
        assert_eq!(token.expose_secret(), "second");
    }

    #[test]
    fn test_corrupt_store_is_unavailable() {
        std::env::remove_var(GITHUB_TOKEN_ENV);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.toml");
        fs::write(&path, "not = [valid").unwrap();

        let store = TokenStore::at(path);
        assert!(matches!(
            store.token(),
            Err(GitliftError::StoreUnavailable(_))
        ));
    }
}
