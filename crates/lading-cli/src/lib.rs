//! Lading CLI library - command definitions and stage implementations.

pub mod cli;
pub mod commands;
pub mod error;

pub use cli::{Cli, Command};
pub use error::{CliError, Result};
