//! GitHub API client wrapper using octocrab
//!
//! The bearer token is carried by the client value built once per run;
//! there is no shared global authentication state.

use octocrab::Octocrab;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GitliftError, Result};

/// Parameters for the repository-creation call
#[derive(Debug, Serialize)]
pub struct RepoDescriptor {
    pub name: String,
    pub description: String,
    pub private: bool,
}

/// Subset of the repository-creation response this tool uses
#[derive(Debug, Deserialize)]
struct CreatedRepository {
    ssh_url: Option<String>,
    clone_url: Option<String>,
    full_name: Option<String>,
}

/// GitHub API client wrapper
pub struct GitHubClient {
    inner: Octocrab,
}

impl GitHubClient {
    /// Create a client authenticated with `token`
    ///
    /// Local state only; no network call is made here.
    pub fn new(token: &SecretString) -> Result<Self> {
        let octocrab = Octocrab::builder()
            .personal_token(token.expose_secret().to_string())
            .build()
            .map_err(|e| GitliftError::GitHubApi(e.to_string()))?;

        Ok(Self { inner: octocrab })
    }

    /// Create the remote repository and return its clone URL
    ///
    /// Prefers the SSH URL, falling back to HTTPS.
    pub async fn create_repository(&self, descriptor: &RepoDescriptor) -> Result<String> {
        let created: CreatedRepository = self
            .inner
            .post("/user/repos", Some(descriptor))
            .await
            .map_err(classify_api_error)?;

        if let Some(full_name) = &created.full_name {
            debug!(%full_name, "remote repository created");
        }

        created.ssh_url.or(created.clone_url).ok_or_else(|| {
            GitliftError::GitHubApi("repository created but the response carried no clone URL".to_string())
        })
    }
}

/// Classify an octocrab error into the closed error set
fn classify_api_error(err: octocrab::Error) -> GitliftError {
    if let octocrab::Error::GitHub { source, .. } = &err {
        return classify_status(source.status_code.as_u16(), &source.message);
    }

    GitliftError::GitHubApi(err.to_string())
}

/// Map an API status to an error kind, keeping the code as metadata
fn classify_status(status: u16, message: &str) -> GitliftError {
    match status {
        401 => GitliftError::AuthenticationFailed { status },
        422 => GitliftError::ConflictExists { status },
        _ => GitliftError::GitHubApi(format!("{} (HTTP {})", message, status)),
    }
}
