//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The entry point is the [`Cli`] struct. Usage errors (no script, more
//! than one script) are handled by clap itself, which prints usage text
//! and exits with status 2.

use clap::Parser;
use std::path::PathBuf;

/// flrun - Run FontLab Studio scripts from the command line.
#[derive(Debug, Parser)]
#[command(name = "flrun")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the Python script to execute in FontLab Studio
    #[arg(required_unless_present = "locate")]
    pub script: Option<PathBuf>,

    /// Only locate FontLab Studio and print what was found
    #[arg(long)]
    pub locate: bool,

    /// With --locate, print the descriptor as JSON
    #[arg(long, requires = "locate")]
    pub json: bool,

    /// Do not offer the manual drag-and-drop fallback when FontLab Studio
    /// cannot be located
    #[arg(long)]
    pub no_fallback: bool,

    /// Quit FontLab Studio after the script finishes
    #[arg(long)]
    pub quit: bool,

    /// Kill FontLab Studio if it has not exited after this many seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Write the fallback artifact here instead of the home directory
    #[arg(long, value_name = "DIR")]
    pub fallback_dir: Option<PathBuf>,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
