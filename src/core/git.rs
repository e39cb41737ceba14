//! Local repository bootstrap
//!
//! git2 handles init, staging, the root commit and the remote; the final
//! push shells out to system git so credential helpers and SSH agents keep
//! working.

use std::path::Path;
use std::process::Command;

use git2::{IndexAddOption, Repository, Signature};
use tracing::debug;

use crate::error::{GitliftError, Result};

/// Remote name the new repository pushes to
pub const DEFAULT_REMOTE: &str = "origin";

/// Message used for the root commit
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";

/// Wrapper for the freshly initialized local repository
pub struct LocalRepository {
    repo: Repository,
}

impl LocalRepository {
    /// Initialize a new repository at `path`
    pub fn init<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::init(path)?;
        Ok(Self { repo })
    }

    /// Stage every file in the working directory
    pub fn stage_all(&self) -> Result<()> {
        let mut index = self.repo.index()?;
        index.add_all(["*"].iter(), IndexAddOption::DEFAULT, None)?;
        index.write()?;
        Ok(())
    }

    /// Create the root commit from the staged files
    pub fn commit_initial(&self, message: &str) -> Result<String> {
        let mut index = self.repo.index()?;
        let tree_id = index.write_tree()?;
        let tree = self.repo.find_tree(tree_id)?;

        let signature = self.repo.signature().or_else(|_| {
            // Fallback signature if not configured
            Signature::now("gitlift", "gitlift@localhost")
        })?;

        let commit_id = self
            .repo
            .commit(Some("HEAD"), &signature, &signature, message, &tree, &[])?;

        Ok(commit_id.to_string())
    }

    /// Register the remote the initial push targets
    pub fn add_remote(&self, name: &str, url: &str) -> Result<()> {
        self.repo.remote(name, url)?;
        Ok(())
    }

    /// Get the current branch name
    pub fn current_branch(&self) -> Result<String> {
        match self.repo.head() {
            Ok(head) => {
                if head.is_branch() {
                    Ok(head.shorthand().unwrap_or("HEAD").to_string())
                } else {
                    // Detached HEAD state
                    Ok("HEAD".to_string())
                }
            }
            Err(e) => {
                // Handle unborn HEAD (no commits yet)
                if e.code() == git2::ErrorCode::UnbornBranch {
                    // Try to get the branch from config
                    if let Ok(config) = self.repo.config() {
                        if let Ok(branch) = config.get_string("init.defaultBranch") {
                            return Ok(branch);
                        }
                    }
                    Ok("master".to_string())
                } else {
                    Err(e.into())
                }
            }
        }
    }

    /// Push `branch` to a remote and set its upstream using system git
    pub fn push_upstream(&self, remote_name: &str, branch: &str) -> Result<()> {
        let command = format!("git push -u {} {}", remote_name, branch);

        let workdir = self
            .repo
            .workdir()
            .map(Path::to_path_buf)
            .ok_or_else(|| GitliftError::Git(git2::Error::from_str("bare repository")))?;

        let output = Command::new("git")
            .current_dir(&workdir)
            .args(["push", "-u", remote_name, branch])
            .output()
            .map_err(|e| GitliftError::SubprocessFailed {
                command: command.clone(),
                stderr: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitliftError::SubprocessFailed {
                command,
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(())
    }

    /// Run the whole bootstrap sequence in the current directory
    ///
    /// Init, stage all files, root commit, remote add, push. Each sub-step
    /// failure is fatal; nothing is rolled back.
    pub fn initialize_and_push(remote_url: &str) -> Result<()> {
        let repo = Self::init(".")?;
        debug!("repository initialized");

        repo.stage_all()?;
        let commit_id = repo.commit_initial(INITIAL_COMMIT_MESSAGE)?;
        debug!(%commit_id, "root commit created");

        repo.add_remote(DEFAULT_REMOTE, remote_url)?;

        let branch = repo.current_branch()?;
        debug!(%branch, %remote_url, "pushing");
        repo.push_upstream(DEFAULT_REMOTE, &branch)?;

        Ok(())
    }
}
