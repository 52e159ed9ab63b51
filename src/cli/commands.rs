//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// BookStack catalog browser
#[derive(Parser, Debug)]
#[command(name = "bookstack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalog endpoint (overrides the config file)
    #[arg(short, long, global = true)]
    pub endpoint: Option<String>,

    /// Items per page (overrides the config file)
    #[arg(short = 'n', long, global = true)]
    pub page_size: Option<usize>,

    /// Name shown in the greeting
    #[arg(short, long, global = true, default_value = "reader")]
    pub user: String,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show one page of the catalog
    Page {
        /// 1-based page number; out-of-range pages show page 1
        #[arg(default_value = "1")]
        page: usize,
    },

    /// Show every page in order
    Browse,

    /// Simulate reaching the end of the list repeatedly
    Scroll {
        /// Number of end-of-list triggers
        #[arg(long, default_value = "3")]
        steps: usize,
    },

    /// Print the effective configuration
    Config,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one snapshot per line)
    Json,
    /// Human-readable output
    Pretty,
}
