//! Core functionality for gitlift
//!
//! This module contains the local side of the bootstrap flow:
//! - Working-directory probes
//! - Token persistence
//! - Local repository setup
//! - .gitignore generation

pub mod git;
pub mod gitignore;
pub mod token_store;
pub mod workspace;

pub use git::LocalRepository;
pub use token_store::TokenStore;
