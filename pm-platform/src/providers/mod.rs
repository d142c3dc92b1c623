//! Platform-specific provider implementations.

#[cfg(unix)]
pub mod unix;

#[cfg(windows)]
pub mod windows;

#[cfg(target_os = "macos")]
pub mod macos;

// Script rendering is pure and available on all platforms for testing
pub mod shared;

// Re-export platform providers
#[cfg(unix)]
pub use unix::UnixPlatform;

#[cfg(windows)]
pub use windows::WindowsPlatform;

#[cfg(target_os = "macos")]
pub use macos::MacOSPlatform;
