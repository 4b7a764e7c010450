//! flrun - Run FontLab Studio scripts from the command line.
//!
//! flrun locates a locally installed FontLab Studio 5, wraps a Python
//! script into a temporary self-deleting `.flw` launcher file, and hands
//! that file to the application. When the application cannot be located
//! automatically, the launcher is placed in the user's home directory with
//! manual drag-and-drop instructions instead.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`launcher`] - Packaging scripts into `.flw` launcher files
//! - [`locator`] - FontLab Studio installation discovery
//! - [`runner`] - Subprocess invocation and the manual fallback
//!
//! # Example
//!
//! ```no_run
//! use flrun::runner::{Invoker, RunOptions};
//!
//! let invoker = Invoker::new();
//! let outcome = invoker.run("export.py".as_ref(), &RunOptions::default())?;
//! if let Some(instructions) = outcome.instructions {
//!     println!("{}", instructions);
//! }
//! # Ok::<(), flrun::FlrunError>(())
//! ```

pub mod cli;
pub mod error;
pub mod launcher;
pub mod locator;
pub mod runner;

pub use error::{FlrunError, Result};
