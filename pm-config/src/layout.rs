use std::io;
use std::path::{self, Path, PathBuf};

pub const APP_DIR: &str = "ComfyUI";
pub const CONFIG_FILE: &str = "config.json";
pub const MODEL_SUBDIRS: [&str; 3] = ["unet", "vae", "clip"];

/// Paths of an installation relative to its root directory.
///
/// ```rust
/// use pm_config::InstallLayout;
///
/// let layout = InstallLayout::new("/srv/pm");
/// assert!(layout.custom_nodes_dir().ends_with("ComfyUI/custom_nodes"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallLayout {
    root: PathBuf,
}

impl InstallLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Layout rooted at `root`, or at the current directory when `None`.
    ///
    /// The root is made absolute when the working directory can be read.
    pub fn from_root_arg(root: Option<PathBuf>) -> Self {
        let root = root.unwrap_or_else(|| PathBuf::from("."));
        match path::absolute(&root) {
            Ok(absolute) => Self::new(absolute),
            Err(_) => Self::new(root),
        }
    }

    /// Same layout with its root resolved against the working directory.
    pub fn to_absolute(&self) -> io::Result<Self> {
        path::absolute(&self.root).map(Self::new)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn app_dir(&self) -> PathBuf {
        self.root.join(APP_DIR)
    }

    pub fn app_requirements(&self) -> PathBuf {
        self.app_dir().join("requirements.txt")
    }

    pub fn custom_nodes_dir(&self) -> PathBuf {
        self.app_dir().join("custom_nodes")
    }

    pub fn custom_node_dir(&self, name: &str) -> PathBuf {
        self.custom_nodes_dir().join(name)
    }

    pub fn models_dir(&self) -> PathBuf {
        self.app_dir().join("models")
    }

    pub fn model_dirs(&self) -> Vec<PathBuf> {
        MODEL_SUBDIRS
            .iter()
            .map(|sub| self.models_dir().join(sub))
            .collect()
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    pub fn app_installed(&self) -> bool {
        self.app_dir().is_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        let layout = InstallLayout::new("/opt/pm");
        assert_eq!(layout.app_dir(), PathBuf::from("/opt/pm/ComfyUI"));
        assert_eq!(
            layout.app_requirements(),
            PathBuf::from("/opt/pm/ComfyUI/requirements.txt")
        );
        assert_eq!(
            layout.custom_node_dir("rgthree-comfy"),
            PathBuf::from("/opt/pm/ComfyUI/custom_nodes/rgthree-comfy")
        );
        assert_eq!(layout.config_path(), PathBuf::from("/opt/pm/config.json"));
        assert_eq!(
            layout.model_dirs(),
            vec![
                PathBuf::from("/opt/pm/ComfyUI/models/unet"),
                PathBuf::from("/opt/pm/ComfyUI/models/vae"),
                PathBuf::from("/opt/pm/ComfyUI/models/clip"),
            ]
        );
    }

    #[test]
    fn test_default_root_is_current_dir() {
        let layout = InstallLayout::from_root_arg(None);
        assert!(layout.root().is_absolute());
        assert!(layout.root().starts_with(std::env::current_dir().unwrap()));
    }

    #[test]
    fn test_relative_root_made_absolute() {
        let layout = InstallLayout::from_root_arg(Some(PathBuf::from("pm-home")));
        assert!(layout.root().is_absolute());
        assert!(layout.root().ends_with("pm-home"));

        let resolved = InstallLayout::new("pm-home").to_absolute().unwrap();
        assert_eq!(resolved, layout);
        assert!(resolved.config_path().is_absolute());
    }

    #[test]
    fn test_app_installed() {
        let temp_dir = tempfile::tempdir().unwrap();
        let layout = InstallLayout::new(temp_dir.path());
        assert!(!layout.app_installed());
        std::fs::create_dir(layout.app_dir()).unwrap();
        assert!(layout.app_installed());
    }
}
