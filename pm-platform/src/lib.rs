//! Cross-platform abstraction layer for Portrait Master.
//!
//! Launcher scripts, desktop shortcuts, browser opening and memory queries
//! differ per operating system. Those differences live behind
//! [`PlatformProvider`] so the binaries never need `#[cfg]` blocks of their own.

pub mod providers;
pub mod registry;
pub mod traits;

// Re-export commonly used items
pub use registry::PlatformRegistry;
pub use traits::PlatformProvider;

/// Get the current platform provider
pub fn current() -> std::sync::Arc<dyn PlatformProvider> {
    PlatformRegistry::current()
}
