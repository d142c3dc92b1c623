//! macOS platform provider implementation.
//!
//! macOS is Unix-like but opens URLs with `open` and reports itself as Darwin.

use crate::providers::shared::{render_shell_launcher, SharedPlatformOps, UNIX_LAUNCHER_SCRIPT};
use crate::providers::unix::make_executable;
use crate::traits::PlatformProvider;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// macOS platform provider
pub struct MacOSPlatform;

impl SharedPlatformOps for MacOSPlatform {}

impl PlatformProvider for MacOSPlatform {
    fn name(&self) -> &'static str {
        "macos"
    }

    fn system_name(&self) -> &'static str {
        "Darwin"
    }

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

    fn browser_command(&self, url: &str) -> (&'static str, Vec<String>) {
        ("open", vec![url.to_string()])
    }

    fn open_browser(&self, url: &str) -> Result<()> {
        self.default_open_browser(url)
    }

    fn total_memory_bytes(&self) -> Result<u64> {
        self.default_total_memory_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browser_uses_open() {
        let (program, _) = MacOSPlatform.browser_command("http://localhost:8188");
        assert_eq!(program, "open");
    }

    #[test]
    fn test_system_name() {
        assert_eq!(MacOSPlatform.system_name(), "Darwin");
    }
}
