//! Command-line interface for flrun.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and the command implementations behind them.

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::dispatch;
