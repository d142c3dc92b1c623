//! Shared implementations for platform providers.
//!
//! Default implementations of `PlatformProvider` methods that are identical
//! across platforms, plus the pure renderers for launcher files so their
//! contents can be checked on any host.

use crate::traits::PlatformProvider;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

pub const UNIX_LAUNCHER_SCRIPT: &str = "portrait-master.sh";
pub const WINDOWS_LAUNCHER_SCRIPT: &str = "Portrait Master.bat";
pub const SHORTCUT_NAME: &str = "Portrait Master.lnk";

/// Provides default implementations for common operations
pub trait SharedPlatformOps: PlatformProvider {
    /// Default implementation for home_dir
    fn default_home_dir(&self) -> Result<PathBuf> {
        dirs::home_dir().context("Could not determine home directory")
    }

    /// Default implementation for desktop_dir
    fn default_desktop_dir(&self) -> Result<PathBuf> {
        match dirs::desktop_dir() {
            Some(dir) => Ok(dir),
            None => Ok(self.home_dir()?.join("Desktop")),
        }
    }

    /// Default implementation for write_launcher_script
    fn default_write_launcher_script(&self, dir: &Path, launcher_binary: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir).context("Failed to create launcher directory")?;
        let path = dir.join(self.launcher_script_name());
        fs::write(&path, self.launcher_script(launcher_binary))
            .with_context(|| format!("Failed to write launcher script {}", path.display()))?;
        Ok(path)
    }

    /// Default implementation for open_browser
    fn default_open_browser(&self, url: &str) -> Result<()> {
        let (program, args) = self.browser_command(url);
        debug!(program, url, "opening browser");
        Command::new(program)
            .args(&args)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("Failed to run '{}'", program))?;
        Ok(())
    }

    /// Default implementation for total_memory_bytes
    fn default_total_memory_bytes(&self) -> Result<u64> {
        let mut sys = sysinfo::System::new();
        sys.refresh_memory();
        Ok(sys.total_memory())
    }
}

/// POSIX shell launcher that runs from its own directory.
pub fn render_shell_launcher(launcher_binary: &Path) -> String {
    format!(
        "#!/bin/sh\n\
         cd \"$(dirname \"$0\")\" || exit 1\n\
         echo \"Starting Portrait Master FLUX...\"\n\
         exec \"{}\" \"$@\"\n",
        launcher_binary.display()
    )
}

/// Windows batch launcher that runs from its own directory and pauses on exit.
pub fn render_batch_launcher(launcher_binary: &Path) -> String {
    format!(
        "@echo off\r\n\
         cd /d \"%~dp0\"\r\n\
         echo Starting Portrait Master FLUX...\r\n\
         \"{}\" %*\r\n\
         pause\r\n",
        launcher_binary.display()
    )
}

/// PowerShell snippet that creates a `.lnk` through `WScript.Shell`.
pub fn render_shortcut_script(shortcut: &Path, target: &Path, working_dir: &Path) -> String {
    format!(
        "$WshShell = New-Object -comObject WScript.Shell\n\
         $Shortcut = $WshShell.CreateShortcut(\"{}\")\n\
         $Shortcut.TargetPath = \"{}\"\n\
         $Shortcut.WorkingDirectory = \"{}\"\n\
         $Shortcut.IconLocation = \"shell32.dll,14\"\n\
         $Shortcut.Save()\n",
        shortcut.display(),
        target.display(),
        working_dir.display()
    )
}
