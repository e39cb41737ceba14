//! gitlift - publish the current directory as a new GitHub repository
//!
//! This library backs the `gitlift` command: it authenticates to GitHub,
//! creates the remote repository, writes a `.gitignore`, and wires up the
//! local working copy to push to the new remote.

pub mod cli;
pub mod core;
pub mod error;
pub mod github;

pub use error::{GitliftError, Result};
