//! CLI module
//!
//! Command-line host for the home screen.
//!
//! # Commands
//!
//! - `page` - Show one page of the catalog
//! - `browse` - Walk every page with the Next button
//! - `scroll` - Walk pages with end-of-list triggers
//! - `config` - Print the effective configuration

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::{render_pretty, Runner, StderrAlertSink};
