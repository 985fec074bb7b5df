//! CLI parse: clap types for vigil. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Vigil CLI - file integrity monitoring via content-digest baselines
#[derive(Parser)]
#[command(name = "vigil")]
#[command(about = "Detect modified and new files by comparing a tree against a digest baseline")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory tree to scan
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Baseline file path (defaults to the per-root data location)
    #[arg(long)]
    pub baseline: Option<PathBuf>,

    /// Configuration file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan the tree and save a fresh baseline of file digests
    Snapshot,
    /// Rescan the tree and report files that are new or modified since the baseline
    Verify {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,

        /// Include unchanged files in the report
        #[arg(long)]
        all: bool,
    },
}
