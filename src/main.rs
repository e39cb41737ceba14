//! gitlift - GitHub repository bootstrapper
//!
//! Run inside the directory you want to publish. gitlift creates the remote
//! repository on GitHub, writes a `.gitignore`, and pushes the initial
//! commit.
//!
//! Available as the `gl` command.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gitlift::cli::commands::Cli;
use gitlift::cli::init;
use gitlift::error::{GitliftError, Result};

#[tokio::main]
async fn main() {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    // No flags beyond --help/--version; running the binary is the command.
    let _cli = Cli::parse();

    if let Err(e) = run().await {
        // The precondition gate is a clean stop, not a failure.
        if matches!(e, GitliftError::AlreadyGitRepository) {
            println!("{}", e);
            return;
        }
        handle_error(&e);
        std::process::exit(1);
    }
}

/// Print the error with the message its kind carries
fn handle_error(e: &GitliftError) {
    match e {
        GitliftError::AuthenticationFailed { status } => {
            tracing::debug!(status = *status, "authentication rejected");
            eprintln!("{}", e);
        }
        GitliftError::ConflictExists { status } => {
            tracing::debug!(status = *status, "conflicting resource on GitHub");
            eprintln!("{}", e);
        }
        // All other errors
        _ => {
            eprintln!("Error: {}", e);
        }
    }
}

async fn run() -> Result<()> {
    init::handle_init().await
}
