//! FontLab Studio installation discovery.
//!
//! The locator probes the well-known install locations for each supported
//! platform and reports how the application should be invoked. On the two
//! supported desktop platforms it never reports not-found: when no known
//! install is present it degrades to a generic "open" strategy (the system
//! file browser on Windows, `open` on macOS) and relies on the `.flw`
//! file-type association. Exact install-path detection is heuristic and must
//! not block the user from attempting execution.
//!
//! Every locate call constructs a fresh [`AppDescriptor`]; nothing is cached
//! across calls.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Host platform family, as far as FontLab Studio support is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Platform {
    Windows,
    MacOsx,
    Unknown,
}

impl Platform {
    /// Platform the current process is running on.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOsx
        } else {
            Platform::Unknown
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Platform::Windows => "Windows",
            Platform::MacOsx => "Mac OS X",
            Platform::Unknown => "Unknown",
        };
        write!(f, "{}", name)
    }
}

/// Whether, where, and how an installed FontLab Studio can be invoked.
#[derive(Debug, Clone, Serialize)]
pub struct AppDescriptor {
    /// True when the application can be handed a launcher file, even if only
    /// through the generic-open degradation.
    pub found: bool,

    /// Platform the probe ran on.
    pub platform: Platform,

    /// Detected version, or `"?.?"` when the install could not be pinned
    /// down.
    pub version: String,

    /// Path to the executable or application bundle; empty in the degraded
    /// case.
    pub path: PathBuf,

    /// Leading arguments of the subprocess invocation; the launcher file
    /// path is appended as the final argument.
    pub invocation: Vec<String>,
}

/// Version reported when an install could not be pinned down.
const VERSION_UNKNOWN: &str = "?.?";

/// Locate FontLab Studio on the current machine.
pub fn locate() -> AppDescriptor {
    let platform = Platform::current();
    locate_on(platform, &default_search_root(platform))
}

/// Directory probed for application installs on `platform`.
///
/// Windows honors `%PROGRAMFILES%` with a hardcoded fallback; macOS uses the
/// system applications directory.
pub fn default_search_root(platform: Platform) -> PathBuf {
    match platform {
        Platform::Windows => std::env::var_os("PROGRAMFILES")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(r"C:\Program Files")),
        Platform::MacOsx => PathBuf::from("/Applications"),
        Platform::Unknown => PathBuf::new(),
    }
}

/// Probe `search_root` for known FontLab Studio installs on `platform`.
///
/// Split out from [`locate`] so tests can point it at fixture directories.
pub fn locate_on(platform: Platform, search_root: &Path) -> AppDescriptor {
    match platform {
        Platform::Windows => locate_windows(search_root),
        Platform::MacOsx => locate_macos(search_root),
        Platform::Unknown => {
            tracing::warn!(
                "FontLab Studio can only be located on Mac OS X or Microsoft Windows"
            );
            AppDescriptor {
                found: false,
                platform,
                version: String::new(),
                path: PathBuf::new(),
                invocation: Vec::new(),
            }
        }
    }
}

fn locate_windows(search_root: &Path) -> AppDescriptor {
    let exe = search_root.join("FontLab").join("Studio5").join("Studio5.exe");
    if exe.exists() {
        AppDescriptor {
            found: true,
            platform: Platform::Windows,
            version: "5.0".to_string(),
            invocation: vec![exe.to_string_lossy().into_owned()],
            path: exe,
        }
    } else {
        // Degraded: hand the launcher to the file browser and rely on the
        // .flw association.
        AppDescriptor {
            found: true,
            platform: Platform::Windows,
            version: VERSION_UNKNOWN.to_string(),
            path: PathBuf::new(),
            invocation: vec!["explorer".to_string()],
        }
    }
}

fn locate_macos(search_root: &Path) -> AppDescriptor {
    // Newest version first.
    let studio_51 = search_root.join("FontLab Studio 5.app");
    if studio_51.exists() {
        return AppDescriptor {
            found: true,
            platform: Platform::MacOsx,
            version: "5.1".to_string(),
            path: studio_51,
            invocation: vec![
                "open".to_string(),
                "-a".to_string(),
                "FontLab Studio 5.app".to_string(),
            ],
        };
    }

    let studio_50 = search_root.join("FontLab Studio").join("FontLab Studio.app");
    if studio_50.exists() {
        return AppDescriptor {
            found: true,
            platform: Platform::MacOsx,
            version: "5.0".to_string(),
            path: studio_50,
            invocation: vec![
                "open".to_string(),
                "-a".to_string(),
                "FontLab Studio.app".to_string(),
            ],
        };
    }

    AppDescriptor {
        found: true,
        platform: Platform::MacOsx,
        version: VERSION_UNKNOWN.to_string(),
        path: PathBuf::new(),
        invocation: vec!["open".to_string()],
    }
}
