//! CLI definition using clap
//!
//! gitlift takes no flags: running the binary in a directory performs the
//! full bootstrap flow. clap still provides `--help` and `--version`.

use clap::Parser;

/// gitlift - publish the current directory as a new GitHub repository
///
/// Creates the remote repository, writes a .gitignore, initializes the
/// local repository and pushes the initial commit. Answers are collected
/// interactively; a stored token is reused across runs.
#[derive(Parser, Debug)]
#[command(name = "gitlift", version, about, long_about = None)]
pub struct Cli {}
