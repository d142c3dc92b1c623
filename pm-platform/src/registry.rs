//! Platform registry for detecting and providing platform implementations.

use crate::traits::PlatformProvider;
use std::sync::Arc;

#[cfg(target_os = "macos")]
use crate::providers::MacOSPlatform;

#[cfg(windows)]
use crate::providers::WindowsPlatform;

#[cfg(unix)]
use crate::providers::UnixPlatform;

/// Platform registry for detecting the current platform and creating providers.
pub struct PlatformRegistry;

impl PlatformRegistry {
    /// Get the platform provider for the current operating system.
    ///
    /// This function automatically detects the current platform and returns
    /// the appropriate provider implementation.
    pub fn current() -> Arc<dyn PlatformProvider> {
        #[cfg(target_os = "macos")]
        return Arc::new(MacOSPlatform);

        #[cfg(windows)]
        return Arc::new(WindowsPlatform);

        #[cfg(all(unix, not(target_os = "macos")))]
        return Arc::new(UnixPlatform);

        #[cfg(not(any(unix, windows)))]
        compile_error!("Unsupported platform - only Unix-like and Windows platforms are supported");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_platform() {
        let platform = PlatformRegistry::current();
        assert!(["unix", "windows", "macos"].contains(&platform.name()));
    }

    #[test]
    fn test_platform_basic_operations() {
        let platform = PlatformRegistry::current();

        assert!(platform.home_dir().is_ok());
        assert!(platform.desktop_dir().is_ok());
        assert!(!platform.python_candidates().is_empty());

        let script_name = platform.launcher_script_name();
        assert!(script_name.ends_with(".sh") || script_name.ends_with(".bat"));

        let (program, args) = platform.browser_command("http://localhost:8188");
        assert!(!program.is_empty());
        assert_eq!(args.last().map(String::as_str), Some("http://localhost:8188"));
    }
}
