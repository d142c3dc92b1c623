//! Unix platform provider implementation.

use crate::providers::shared::{render_shell_launcher, SharedPlatformOps, UNIX_LAUNCHER_SCRIPT};
use crate::traits::PlatformProvider;
use anyhow::{Context, Result};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Unix platform provider (Linux and other Unix-like systems)
pub struct UnixPlatform;

impl SharedPlatformOps for UnixPlatform {}

/// Marks a launcher script executable for its owner, group and others.
pub(crate) fn make_executable(path: &Path) -> Result<()> {
    let mut permissions = fs::metadata(path)
        .with_context(|| format!("Failed to read metadata of {}", path.display()))?
        .permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(path, permissions)
        .with_context(|| format!("Failed to make {} executable", path.display()))
}

impl PlatformProvider for UnixPlatform {
    fn name(&self) -> &'static str {
        "unix"
    }

    fn system_name(&self) -> &'static str {
        "Linux"
    }

    // === Path Operations ===

    fn home_dir(&self) -> Result<PathBuf> {
        self.default_home_dir()
    }

    fn desktop_dir(&self) -> Result<PathBuf> {
        self.default_desktop_dir()
    }

    fn executable_name(&self, base: &str) -> String {
        base.to_string()
    }

    fn python_candidates(&self) -> &'static [&'static str] {
        &["python3", "python"]
    }

    // === Launcher Files ===

    fn launcher_script_name(&self) -> &'static str {
        UNIX_LAUNCHER_SCRIPT
    }

    fn launcher_script(&self, launcher_binary: &Path) -> String {
        render_shell_launcher(launcher_binary)
    }

    fn write_launcher_script(&self, dir: &Path, launcher_binary: &Path) -> Result<PathBuf> {
        let path = self.default_write_launcher_script(dir, launcher_binary)?;
        make_executable(&path)?;
        Ok(path)
    }

    fn create_desktop_shortcut(&self, _target: &Path, _working_dir: &Path) -> Result<Option<PathBuf>> {
        Ok(None)
    }

    // === Processes ===

    fn browser_command(&self, url: &str) -> (&'static str, Vec<String>) {
        ("xdg-open", vec![url.to_string()])
    }

    fn open_browser(&self, url: &str) -> Result<()> {
        self.default_open_browser(url)
    }

    // === System Information ===

    fn total_memory_bytes(&self) -> Result<u64> {
        // Try reading from /proc/meminfo first (Linux)
        if let Ok(meminfo) = fs::read_to_string("/proc/meminfo") {
            if let Some(kb) = parse_meminfo_total_kb(&meminfo) {
                return Ok(kb * 1024);
            }
        }

        // Fallback to sysinfo
        self.default_total_memory_bytes()
    }
}

fn parse_meminfo_total_kb(meminfo: &str) -> Option<u64> {
    meminfo
        .lines()
        .find(|line| line.starts_with("MemTotal:"))
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|value| value.parse().ok())
}
