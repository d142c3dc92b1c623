//! The `config.json` document.
//!
//! Field order in these structs is the key order on disk; serialization is
//! deterministic so rewriting the file with the same values is a no-op.

use pm_core::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

pub const CONFIG_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub version: String,
    pub auto_launch: bool,
    pub default_gpu: String,
    pub default_resolution: [u32; 2],
    pub default_steps: u32,
    pub default_cfg: f64,
    pub model_paths: ModelPaths,
    pub performance: PerformanceSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelPaths {
    pub unet: String,
    pub vae: String,
    pub clip: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceSettings {
    pub low_vram_mode: bool,
    pub cpu_fallback: bool,
    pub max_batch_size: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION.to_string(),
            auto_launch: true,
            default_gpu: "auto".to_string(),
            default_resolution: [768, 1024],
            default_steps: 20,
            default_cfg: 1.0,
            model_paths: ModelPaths::default(),
            performance: PerformanceSettings::default(),
        }
    }
}

impl Default for ModelPaths {
    fn default() -> Self {
        Self {
            unet: "ComfyUI/models/unet/".to_string(),
            vae: "ComfyUI/models/vae/".to_string(),
            clip: "ComfyUI/models/clip/".to_string(),
        }
    }
}

impl Default for PerformanceSettings {
    fn default() -> Self {
        Self {
            low_vram_mode: false,
            cpu_fallback: true,
            max_batch_size: 4,
        }
    }
}

impl AppConfig {
    /// Pretty JSON with two-space indentation and a trailing newline.
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Overwrites `path` with this configuration.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json()?)?;
        debug!(path = %path.display(), "wrote config");
        Ok(())
    }
}
