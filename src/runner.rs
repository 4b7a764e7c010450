//! Invoking FontLab Studio with a packaged launcher.
//!
//! The invoker ties the locator and the packager together: it wraps the
//! input script into a launcher file, then either hands that file to the
//! located application as a subprocess or, when the application cannot be
//! found, copies the launcher to a well-known place and composes manual
//! drag-and-drop instructions.
//!
//! The child's own exit status is deliberately not propagated into the run
//! outcome: GUI launchers like `open` and `explorer` report codes unrelated
//! to the script run. Launch-level failures (missing executable, permission
//! denied, timeout) are surfaced as distinct errors instead.

use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use crate::error::{FlrunError, Result};
use crate::launcher::{self, ScriptSource};
use crate::locator::{self, AppDescriptor, Platform};

/// Name of the fallback artifact placed in the user's home directory.
pub const FALLBACK_FILENAME: &str = "RunThisInFLS.flw";

/// Poll interval while waiting on a child with a timeout.
const WAIT_POLL: Duration = Duration::from_millis(100);

/// Options controlling a single run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Offer the manual drag-and-drop fallback when the application cannot
    /// be located.
    pub allow_fallback: bool,

    /// Append a quit command so the application exits after the script.
    pub auto_quit: bool,

    /// Kill the application if it has not exited after this many seconds
    /// (None = block until it exits).
    pub timeout: Option<u64>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            allow_fallback: true,
            auto_quit: false,
            timeout: None,
        }
    }
}

/// What a run produced.
#[derive(Debug)]
pub struct RunOutcome {
    /// Whether the script was handed off (to the application or to a
    /// fallback artifact).
    pub success: bool,

    /// Path of the fallback artifact, when one was written.
    pub fallback_path: Option<PathBuf>,

    /// Human-readable guidance for the user, when any applies.
    pub instructions: Option<String>,
}

/// Runs scripts through a located (or fallback) FontLab Studio.
///
/// [`Invoker::new`] binds to the real host environment; the `with_*`
/// builders override the probed roots so tests can run against fixtures.
pub struct Invoker {
    platform: Platform,
    search_root: PathBuf,
    work_dir: PathBuf,
    fallback_dir: Option<PathBuf>,
}

impl Invoker {
    /// Invoker for the real host environment.
    pub fn new() -> Self {
        let platform = Platform::current();
        Self {
            platform,
            search_root: locator::default_search_root(platform),
            work_dir: std::env::temp_dir(),
            fallback_dir: None,
        }
    }

    /// Override the platform the locator assumes.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Override the directory probed for installs.
    pub fn with_search_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.search_root = root.into();
        self
    }

    /// Override the directory launcher files are created in.
    pub fn with_work_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.work_dir = dir.into();
        self
    }

    /// Override where the fallback artifact is written (default: the user's
    /// home directory).
    pub fn with_fallback_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.fallback_dir = Some(dir.into());
        self
    }

    /// Locate, package, and invoke.
    ///
    /// Returns `success=false` (not an error) when the input script is
    /// missing or when the application is unlocatable and fallback is
    /// disallowed; both states come with instruction text.
    pub fn run(&self, script: &Path, opts: &RunOptions) -> Result<RunOutcome> {
        if !script.exists() {
            tracing::warn!(script = %script.display(), "input script does not exist");
            return Ok(RunOutcome {
                success: false,
                fallback_path: None,
                instructions: Some(format!(
                    "Input script does not exist at:\n{}",
                    script.display()
                )),
            });
        }

        let app = locator::locate_on(self.platform, &self.search_root);
        let launcher_path = launcher::package_in(
            &self.work_dir,
            ScriptSource::Path(script.to_path_buf()),
            opts.auto_quit,
        )?;

        if app.found {
            self.launch(&app, &launcher_path, opts)?;
            return Ok(RunOutcome {
                success: true,
                fallback_path: None,
                instructions: None,
            });
        }

        if opts.allow_fallback {
            return self.write_fallback(&app, &launcher_path);
        }

        // No fallback wanted and nothing to launch: drop the now-useless
        // launcher instead of leaking it.
        remove_if_exists(&launcher_path);
        Ok(RunOutcome {
            success: false,
            fallback_path: None,
            instructions: Some(
                "FontLab Studio could not be located automatically in any of the \
                 standard locations. The execution was not successful."
                    .to_string(),
            ),
        })
    }

    fn launch(&self, app: &AppDescriptor, launcher_path: &Path, opts: &RunOptions) -> Result<()> {
        let Some((program, args)) = app.invocation.split_first() else {
            return Err(anyhow::anyhow!("locator returned an empty invocation").into());
        };

        tracing::debug!(%program, launcher = %launcher_path.display(), "launching application");

        let mut cmd = Command::new(program);
        cmd.args(args).arg(launcher_path);
        // Output is discarded: the application is a GUI process and nothing
        // useful comes back over its pipes.
        cmd.stdout(Stdio::null()).stderr(Stdio::null());

        let mut child = match cmd.spawn() {
            Ok(child) => child,
            Err(source) => {
                remove_if_exists(launcher_path);
                return Err(FlrunError::LaunchFailed {
                    program: program.clone(),
                    source,
                });
            }
        };

        let status = match opts.timeout {
            None => child.wait()?,
            Some(seconds) => match wait_with_timeout(&mut child, Duration::from_secs(seconds)) {
                Ok(status) => status,
                Err(err) => {
                    remove_if_exists(launcher_path);
                    return Err(err);
                }
            },
        };

        tracing::debug!(?status, "application exited");
        Ok(())
    }

    fn write_fallback(&self, app: &AppDescriptor, launcher_path: &Path) -> Result<RunOutcome> {
        let dir = match &self.fallback_dir {
            Some(dir) => dir.clone(),
            None => dirs::home_dir().ok_or(FlrunError::HomeDirUnavailable)?,
        };
        let fallback_path = dir.join(FALLBACK_FILENAME);
        std::fs::copy(launcher_path, &fallback_path)?;
        std::fs::remove_file(launcher_path)?;

        let mut text = format!(
            "FontLab Studio could not be located automatically in any of the \
             standard locations. However, if you have FontLab Studio installed, \
             you can execute this package manually. We have created a special file:\n{}\n",
            fallback_path.display()
        );
        match app.platform {
            Platform::Windows => text.push_str(
                "Open FontLab Studio and drag that file from Windows Explorer onto \
                 the FontLab Studio application window.\n",
            ),
            Platform::MacOsx => text.push_str(
                "Open FontLab Studio and drag that file from Finder onto the \
                 FontLab Studio dock icon.\n",
            ),
            Platform::Unknown => {
                text.push_str("Drag that file onto the FontLab Studio window or icon.\n")
            }
        }

        // Success is claimed unconditionally once the artifact exists, even
        // on an unrecognized platform.
        Ok(RunOutcome {
            success: true,
            fallback_path: Some(fallback_path),
            instructions: Some(text),
        })
    }
}

impl Default for Invoker {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for `child`, killing it once `timeout` has elapsed.
fn wait_with_timeout(child: &mut Child, timeout: Duration) -> Result<ExitStatus> {
    let deadline = Instant::now() + timeout;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(status);
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            let _ = child.wait();
            return Err(FlrunError::LaunchTimeout {
                seconds: timeout.as_secs(),
            });
        }
        std::thread::sleep(WAIT_POLL);
    }
}

fn remove_if_exists(path: &Path) {
    if path.exists() {
        if let Err(err) = std::fs::remove_file(path) {
            tracing::debug!(path = %path.display(), %err, "failed to remove launcher file");
        }
    }
}
