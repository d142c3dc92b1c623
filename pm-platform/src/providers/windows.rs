//! Windows platform provider implementation.

use crate::providers::shared::{
    render_batch_launcher, render_shortcut_script, SharedPlatformOps, SHORTCUT_NAME,
    WINDOWS_LAUNCHER_SCRIPT,
};
use crate::traits::PlatformProvider;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Windows platform provider
pub struct WindowsPlatform;

impl SharedPlatformOps for WindowsPlatform {}

impl PlatformProvider for WindowsPlatform {
    fn name(&self) -> &'static str {
        "windows"
    }

    fn system_name(&self) -> &'static str {
        "Windows"
    }

    // === Path Operations ===

    fn home_dir(&self) -> Result<PathBuf> {
        self.default_home_dir()
    }

    fn desktop_dir(&self) -> Result<PathBuf> {
        self.default_desktop_dir()
    }

    fn executable_name(&self, base: &str) -> String {
        if base.ends_with(".exe") {
            base.to_string()
        } else {
            format!("{}.exe", base)
        }
    }

    fn python_candidates(&self) -> &'static [&'static str] {
        &["python", "python3"]
    }

    // === Launcher Files ===

    fn launcher_script_name(&self) -> &'static str {
        WINDOWS_LAUNCHER_SCRIPT
    }

    fn launcher_script(&self, launcher_binary: &Path) -> String {
        render_batch_launcher(launcher_binary)
    }

    fn write_launcher_script(&self, dir: &Path, launcher_binary: &Path) -> Result<PathBuf> {
        self.default_write_launcher_script(dir, launcher_binary)
    }

    fn create_desktop_shortcut(&self, target: &Path, working_dir: &Path) -> Result<Option<PathBuf>> {
        let shortcut = self.desktop_dir()?.join(SHORTCUT_NAME);
        let script = render_shortcut_script(&shortcut, target, working_dir);
        debug!(shortcut = %shortcut.display(), "creating desktop shortcut");

        let output = Command::new("powershell")
            .args(["-NoProfile", "-Command", &script])
            .output()
            .context("Failed to run PowerShell")?;

        if !output.status.success() {
            anyhow::bail!(
                "PowerShell exited with {:?}: {}",
                output.status.code(),
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(Some(shortcut))
    }

    // === Processes ===

    fn browser_command(&self, url: &str) -> (&'static str, Vec<String>) {
        // The empty string is the window title expected by `start`
        (
            "cmd",
            vec![
                "/C".to_string(),
                "start".to_string(),
                String::new(),
                url.to_string(),
            ],
        )
    }

    fn open_browser(&self, url: &str) -> Result<()> {
        self.default_open_browser(url)
    }

    // === System Information ===

    fn total_memory_bytes(&self) -> Result<u64> {
        self.default_total_memory_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_executable_name() {
        assert_eq!(WindowsPlatform.executable_name("pm-launch"), "pm-launch.exe");
        assert_eq!(WindowsPlatform.executable_name("pm-launch.exe"), "pm-launch.exe");
    }

    #[test]
    fn test_launcher_script_name() {
        assert_eq!(WindowsPlatform.launcher_script_name(), "Portrait Master.bat");
    }
}
