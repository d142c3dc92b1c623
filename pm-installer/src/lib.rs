//! Portrait Master installer library.
//!
//! Checks prerequisites, installs the PyTorch runtime and auxiliary
//! packages, clones ComfyUI with its custom nodes and writes the launcher.
//! External commands go through [`pm_core::CommandRunner`] so the sequence
//! runs without a network in tests.

pub mod cli;
pub mod fetch;
pub mod installer;
pub mod launcher;
pub mod prerequisites;
pub mod prompt;
pub mod provision;

#[cfg(test)]
pub(crate) mod testing;

pub use installer::{Environment, InstallOptions, InstallSummary, Installer};
pub use prompt::{decide_mode, ModeFlags, RuntimeMode};
pub use provision::{ProvisionReport, RuntimeTemplate, AUX_PACKAGES};
pub use fetch::{FetchReport, CUSTOM_NODES};
