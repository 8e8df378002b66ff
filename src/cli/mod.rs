//! CLI interface for packed-dawg
//!
//! Builds DAWGs from word lists, writes them packed and inspects packed files.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
