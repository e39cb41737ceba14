//! GitHub API integration module
//!
//! This module provides the remote side of the bootstrap flow:
//! - Personal access token minting (Basic auth + optional one-time code)
//! - Repository creation
//! - Error classification at the API boundary

pub mod auth;
pub mod client;

pub use auth::{Credentials, TokenMinter};
pub use client::{GitHubClient, RepoDescriptor};
