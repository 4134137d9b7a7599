//! CLI module
//!
//! Command-line interface over [`crate::BggClient`].
//!
//! # Commands
//!
//! One subcommand per endpoint (`thing`, `collection`, `user`, `forum`,
//! `forum-list`, `thread`, `geeklist`, `guild`, `hot`, `search`,
//! `sitemap-index`, `sitemap`, `plays`, `family`). Results are printed as
//! JSON on stdout; error responses go to stderr and fail the process.

mod commands;
mod runner;

pub use commands::{Cli, Commands, PageArgs};
pub use runner::Runner;
