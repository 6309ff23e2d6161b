//! Command-line interface for orbitdash: runs the web server and manages the
//! CMS pages stored in the local database.

#![deny(unsafe_code)]

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::{Commands, PageCommand, ServeArgs};
pub use error::CliError;
pub use parser::Cli;
