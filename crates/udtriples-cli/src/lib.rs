//! udtriples CLI library.
//!
//! This library provides the pieces behind the `udtriples` binary:
//! argument parsing, configuration files, command execution and report
//! formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
