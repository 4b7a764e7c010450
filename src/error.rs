//! Error types for flrun operations.
//!
//! This module defines [`FlrunError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `FlrunError` for launch-level failures that need distinct handling
//! - Use `anyhow::Error` (via `FlrunError::Other`) for unexpected errors
//! - A missing input script or an unlocatable application is *not* an error:
//!   those are reported as unsuccessful (or degraded) outcomes, because the
//!   tool always prefers handing the user a manual path forward over bailing

use thiserror::Error;

/// Core error type for flrun operations.
#[derive(Debug, Error)]
pub enum FlrunError {
    /// Spawning the located application failed (missing executable,
    /// permission denied).
    #[error("Failed to launch '{program}': {source}")]
    LaunchFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The launched application did not exit within the requested timeout.
    #[error("Application did not exit within {seconds}s")]
    LaunchTimeout { seconds: u64 },

    /// The user's home directory could not be determined, so the fallback
    /// artifact has nowhere to go.
    #[error("Could not determine the user's home directory")]
    HomeDirUnavailable,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for flrun operations.
pub type Result<T> = std::result::Result<T, FlrunError>;
