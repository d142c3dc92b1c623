//! Configuration for Portrait Master.
//!
//! - [`layout`] - directory layout of an install root, shared by every binary
//! - [`app_config`] - the `config.json` document written by `pm-setup`
//! - [`resources`] - RAM advisory printed during setup

pub mod app_config;
pub mod layout;
pub mod resources;

pub use app_config::{AppConfig, ModelPaths, PerformanceSettings, CONFIG_VERSION};
pub use layout::InstallLayout;
pub use resources::{bytes_to_gb, RamAdvice};
