//! Launcher file packaging.
//!
//! FontLab Studio executes `.flw` files as Python scripts. The packager wraps
//! a caller-supplied script into a uniquely named temporary `.flw` launcher
//! that:
//!
//! - deletes itself as its first action, so successful runs leave no
//!   temporary artifact behind,
//! - binds `__file__` to the original script path (when the source was a
//!   file), so the script can refer to its own location,
//! - optionally appends a quit command so the application exits once the
//!   script has finished.
//!
//! At most one launcher file is live per invocation. The caller owns the
//! returned path and is responsible for removal if the consuming process
//! never runs it.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Extension FontLab Studio associates with runnable script packages.
pub const LAUNCHER_EXTENSION: &str = ".flw";

/// The script to be packaged, as a tagged source.
pub enum ScriptSource {
    /// Read the script from a file on disk. A missing file packages an
    /// empty body rather than failing.
    Path(PathBuf),

    /// Read the script from an open reader until EOF.
    Handle(Box<dyn Read>),

    /// Use the string as the script body verbatim.
    Literal(String),
}

impl std::fmt::Debug for ScriptSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScriptSource::Path(path) => f.debug_tuple("Path").field(path).finish(),
            ScriptSource::Handle(_) => f.debug_tuple("Handle").finish(),
            ScriptSource::Literal(body) => f.debug_tuple("Literal").field(body).finish(),
        }
    }
}

/// Package `source` into a temporary launcher file in the system temp
/// directory and return its path.
pub fn package(source: ScriptSource, auto_quit: bool) -> Result<PathBuf> {
    package_in(&std::env::temp_dir(), source, auto_quit)
}

/// Package `source` into a temporary launcher file under `dir`.
///
/// Split out from [`package`] so tests (and the invoker) can control where
/// launcher files land.
pub fn package_in(dir: &Path, source: ScriptSource, auto_quit: bool) -> Result<PathBuf> {
    let tmp = tempfile::Builder::new()
        .prefix("flrun-")
        .suffix(LAUNCHER_EXTENSION)
        .tempfile_in(dir)?;

    let (body, origin) = resolve_source(source)?;
    let contents = render(&tmp.path().to_string_lossy(), &body, origin.as_deref(), auto_quit);

    // Persist the file past the NamedTempFile guard; from here on the
    // launcher's own self-deletion (or the invoker's cleanup) owns it.
    let (mut file, path) = tmp.keep().map_err(|e| e.error)?;
    file.write_all(contents.as_bytes())?;

    tracing::debug!(launcher = %path.display(), "packaged launcher file");
    Ok(path)
}

/// Resolve a [`ScriptSource`] to a script body plus the absolute origin path
/// when the source was an existing file.
fn resolve_source(source: ScriptSource) -> Result<(String, Option<PathBuf>)> {
    match source {
        ScriptSource::Path(path) => {
            if path.exists() {
                let body = std::fs::read_to_string(&path)?;
                let origin = path.canonicalize().unwrap_or(path);
                Ok((body, Some(origin)))
            } else {
                // Degraded by contract: a missing script packages as empty.
                tracing::debug!(
                    script = %path.display(),
                    "script path does not exist, packaging empty body"
                );
                Ok((String::new(), None))
            }
        }
        ScriptSource::Handle(mut reader) => {
            let mut body = String::new();
            reader.read_to_string(&mut body)?;
            Ok((body, None))
        }
        ScriptSource::Literal(body) => Ok((body, None)),
    }
}

/// Render the launcher template.
///
/// Section order is fixed: self-reference constant, self-deletion snippet,
/// optional origin constant, script body, optional termination snippet.
fn render(tmp_path: &str, body: &str, origin: Option<&Path>, auto_quit: bool) -> String {
    let mut out = format!("\n__tmpfile__ = {}\n", py_str(tmp_path));
    out.push_str("\nimport os, os.path\nif os.path.exists(__tmpfile__):\n\tos.remove(__tmpfile__)\n");
    if let Some(origin) = origin {
        out.push_str(&format!("__file__ = {}\n", py_str(&origin.to_string_lossy())));
    }
    out.push_str(&format!("\n{}\n", body));
    if auto_quit {
        out.push_str("\nsys.exit(0)\n");
    }
    out
}

/// Render a string as a Python single-quoted string literal.
fn py_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str(r"\\"),
            '\'' => out.push_str(r"\'"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}
