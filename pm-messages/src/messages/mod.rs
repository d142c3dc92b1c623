//! Central registry for all user-facing message templates.
//!
//! Organized by entry point:
//! - `installer` - prerequisite checks, provisioning and fetching steps
//! - `launcher` - starting and stopping the external application
//! - `setup` - configuration file and system advice
//! - `common` - messages shared by every binary
//!
//! Templates use `{variable}` placeholders, substituted by `msg!`:
//!
//! ```rust
//! use pm_messages::{msg, MESSAGES};
//!
//! let text = msg!(MESSAGES.installer.python_ok, version = "3.11.4");
//! assert_eq!(text, "Python 3.11.4 OK");
//! ```

mod common;
mod installer;
mod launcher;
mod setup;

pub use common::{CommonMessages, COMMON_MESSAGES};
pub use installer::{InstallerMessages, INSTALLER_MESSAGES};
pub use launcher::{LauncherMessages, LAUNCHER_MESSAGES};
pub use setup::{SetupMessages, SETUP_MESSAGES};

/// Unified messages struct containing all domain-specific message modules
pub struct Messages {
    pub installer: InstallerMessages,
    pub launcher: LauncherMessages,
    pub setup: SetupMessages,
    pub common: CommonMessages,
}

/// Global messages constant - main entry point for all message templates
pub const MESSAGES: Messages = Messages {
    installer: INSTALLER_MESSAGES,
    launcher: LAUNCHER_MESSAGES,
    setup: SETUP_MESSAGES,
    common: COMMON_MESSAGES,
};
