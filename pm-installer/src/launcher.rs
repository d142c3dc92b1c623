//! Launcher script and desktop shortcut.

use anyhow::Context;
use pm_core::error::Result;
use pm_platform::PlatformProvider;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const LAUNCH_BINARY: &str = "pm-launch";

/// The `pm-launch` binary installed next to the running installer, or the
/// bare name to be resolved through PATH when it is not there.
pub fn locate_launch_binary(platform: &dyn PlatformProvider) -> PathBuf {
    let name = platform.executable_name(LAUNCH_BINARY);
    let sibling = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(&name)))
        .filter(|path| path.is_file());

    match sibling {
        Some(path) => path,
        None => {
            debug!(binary = %name, "launcher binary not found next to installer, relying on PATH");
            PathBuf::from(name)
        }
    }
}

/// Writes the platform launcher script into the install root.
pub fn write_launcher(platform: &dyn PlatformProvider, root: &Path, launch_binary: &Path) -> Result<PathBuf> {
    let path = platform
        .write_launcher_script(root, launch_binary)
        .context("Failed to write launcher script")?;
    Ok(path)
}

/// Creates the desktop shortcut where the platform supports one.
pub fn create_shortcut(platform: &dyn PlatformProvider, script: &Path, root: &Path) -> Result<Option<PathBuf>> {
    let shortcut = platform
        .create_desktop_shortcut(script, root)
        .context("Failed to create desktop shortcut")?;
    Ok(shortcut)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_write_launcher_in_root() {
        let temp_dir = TempDir::new().unwrap();
        let platform = pm_platform::current();
        let script = write_launcher(platform.as_ref(), temp_dir.path(), Path::new("pm-launch")).unwrap();

        assert_eq!(script.parent(), Some(temp_dir.path()));
        assert_eq!(
            script.file_name().and_then(|n| n.to_str()),
            Some(platform.launcher_script_name())
        );
        assert!(fs::read_to_string(&script).unwrap().contains("pm-launch"));
    }

    #[test]
    fn test_locate_falls_back_to_name() {
        let platform = pm_platform::current();
        let binary = locate_launch_binary(platform.as_ref());
        assert!(binary.to_string_lossy().contains(LAUNCH_BINARY));
    }

    #[test]
    #[cfg(unix)]
    fn test_no_shortcut_on_unix() {
        let temp_dir = TempDir::new().unwrap();
        let platform = pm_platform::current();
        let result = create_shortcut(platform.as_ref(), temp_dir.path(), temp_dir.path()).unwrap();
        assert!(result.is_none());
    }
}
