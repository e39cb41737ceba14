//! The bootstrap flow
//!
//! Sequences the probe, token acquisition, remote creation, `.gitignore`
//! and the local init-and-push. Strictly linear: the first failure ends
//! the run, and nothing that already happened is rolled back.

use secrecy::SecretString;
use tracing::{debug, info};

use crate::cli::prompt;
use crate::core::git::LocalRepository;
use crate::core::token_store::TokenStore;
use crate::core::{gitignore, workspace};
use crate::error::{GitliftError, Result};
use crate::github::auth::{Credentials, TokenMinter};
use crate::github::client::{GitHubClient, RepoDescriptor};

/// Run the full bootstrap flow in the current directory
pub async fn handle_init() -> Result<()> {
    // Hard precondition: never touch a directory that already is a repository.
    if workspace::directory_exists(".git") {
        return Err(GitliftError::AlreadyGitRepository);
    }

    let store = TokenStore::open()?;
    let token = acquire_token(&store).await?;
    let client = GitHubClient::new(&token)?;

    let descriptor = ask_descriptor()?;
    let remote_url = client.create_repository(&descriptor).await?;
    println!("✓ Created {}", remote_url);

    let patterns = ask_ignore_patterns()?;
    gitignore::write_gitignore(".", &patterns)?;
    debug!(patterns = patterns.len(), "wrote .gitignore");

    LocalRepository::initialize_and_push(&remote_url)?;

    println!("All done!");
    Ok(())
}

/// Stored token, or mint one from prompted credentials
///
/// A stored token short-circuits minting entirely. A freshly minted token
/// is persisted before it is used.
async fn acquire_token(store: &TokenStore) -> Result<SecretString> {
    if let Some(token) = store.token()? {
        debug!("using stored token");
        return Ok(token);
    }

    println!("No stored GitHub token found. Log in to create one.");
    let username = prompt::ask("GitHub username", None)?;
    let password = prompt::ask_secret("GitHub password")?;

    let minter = TokenMinter::new()?;
    let mut credentials = Credentials {
        username,
        password,
        otp: None,
    };

    let token = match minter.mint_personal_access_token(&credentials).await {
        Ok(token) => token,
        Err(GitliftError::TwoFactorRequired) => {
            let code = prompt::ask("Two-factor authentication code", None)?;
            credentials.otp = Some(code);
            minter.mint_personal_access_token(&credentials).await?
        }
        Err(e) => return Err(e),
    };

    store.set_token(&token)?;
    info!("token minted and stored");
    Ok(token)
}

/// Prompt for the repository descriptor
///
/// The name defaults to the current directory's base name.
fn ask_descriptor() -> Result<RepoDescriptor> {
    let default_name = workspace::current_directory_name()?;
    let name = prompt::ask("Repository name", Some(&default_name))?;
    let description = prompt::ask_optional("Description (optional)")?;
    let private = !prompt::confirm("Make the repository public?", true)?;

    Ok(RepoDescriptor {
        name,
        description,
        private,
    })
}

/// Offer the working-directory entries as ignore candidates
///
/// Well-known junk names are preselected; a blank answer with no
/// suggestions leaves the ignore file empty.
fn ask_ignore_patterns() -> Result<Vec<String>> {
    let entries = workspace::visible_entries(".")?;
    if entries.is_empty() {
        return Ok(Vec::new());
    }

    println!("Directory contents: {}", entries.join(", "));

    let suggested: Vec<&str> = entries
        .iter()
        .map(String::as_str)
        .filter(|name| gitignore::is_known_junk(name))
        .collect();
    let default = suggested.join(",");

    let answer = if default.is_empty() {
        prompt::ask_optional("Files or directories to ignore (comma-separated)")?
    } else {
        prompt::ask(
            "Files or directories to ignore (comma-separated)",
            Some(&default),
        )?
    };

    Ok(answer
        .split(',')
        .map(str::trim)
        .filter(|pattern| !pattern.is_empty())
        .map(String::from)
        .collect())
}
