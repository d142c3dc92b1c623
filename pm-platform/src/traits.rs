//! Core traits for platform abstraction.

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Core platform abstraction trait.
///
/// Encapsulates every operation whose behavior depends on the host operating
/// system: path conventions, launcher files, shortcuts and the browser.
pub trait PlatformProvider: Send + Sync {
    /// Get the platform name (e.g., "unix", "windows", "macos")
    fn name(&self) -> &'static str;

    /// Human-readable system name as reported to the user ("Linux", "Darwin", "Windows")
    fn system_name(&self) -> &'static str;

    // === Path Operations ===

    /// Get the user's home directory
    fn home_dir(&self) -> Result<PathBuf>;

    /// Get the user's desktop directory
    fn desktop_dir(&self) -> Result<PathBuf>;

    /// Get the correct executable name for the platform (adds .exe on Windows)
    fn executable_name(&self, base: &str) -> String;

    /// Interpreter names to try, in order, when looking for Python
    fn python_candidates(&self) -> &'static [&'static str];

    // === Launcher Files ===

    /// File name of the launcher script written into the install root
    fn launcher_script_name(&self) -> &'static str;

    /// Contents of the launcher script that starts `launcher_binary`
    fn launcher_script(&self, launcher_binary: &Path) -> String;

    /// Write the launcher script into `dir` and return its path
    fn write_launcher_script(&self, dir: &Path, launcher_binary: &Path) -> Result<PathBuf>;

    /// Create a desktop shortcut to `target`.
    ///
    /// Returns `Ok(None)` on platforms without shortcut support.
    fn create_desktop_shortcut(&self, target: &Path, working_dir: &Path) -> Result<Option<PathBuf>>;

    // === Processes ===

    /// Program and arguments that open `url` in the default browser
    fn browser_command(&self, url: &str) -> (&'static str, Vec<String>);

    /// Open `url` in the default browser without waiting for it
    fn open_browser(&self, url: &str) -> Result<()>;

    // === System Information ===

    /// Get total system memory in bytes
    fn total_memory_bytes(&self) -> Result<u64>;
}
