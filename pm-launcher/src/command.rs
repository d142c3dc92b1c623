use crate::mode::LaunchMode;
use pm_core::CommandSpec;
use std::path::PathBuf;

pub const LISTEN_ADDRESS: &str = "0.0.0.0";
pub const PORT: u16 = 8188;

#[derive(Debug, Clone)]
pub struct LaunchOptions {
    pub python: String,
    pub app_dir: PathBuf,
    pub lowvram: bool,
}

/// The ComfyUI process to spawn, always run from the app directory.
pub type LaunchCommand = CommandSpec;

/// Extra ComfyUI flags for `mode`. `--lowvram` only affects NVIDIA.
pub fn mode_flags(mode: LaunchMode, lowvram: bool) -> &'static [&'static str] {
    match mode {
        LaunchMode::Cpu | LaunchMode::Amd => &["--cpu"],
        LaunchMode::Nvidia if lowvram => &["--lowvram", "--cpu-vae"],
        LaunchMode::Nvidia => &[],
        LaunchMode::AppleSilicon => &["--mps"],
    }
}

pub fn build_command(mode: LaunchMode, options: &LaunchOptions) -> LaunchCommand {
    let port = PORT.to_string();
    let mut args: Vec<String> = ["main.py", "--listen", LISTEN_ADDRESS, "--port", port.as_str()]
        .iter()
        .map(|s| s.to_string())
        .collect();
    args.extend(mode_flags(mode, options.lowvram).iter().map(|s| s.to_string()));

    CommandSpec::new(options.python.clone(), args).current_dir(&options.app_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(lowvram: bool) -> LaunchOptions {
        LaunchOptions {
            python: "python3".to_string(),
            app_dir: PathBuf::from("/opt/pm/ComfyUI"),
            lowvram,
        }
    }

    #[test]
    fn test_base_command() {
        let command = build_command(LaunchMode::Nvidia, &options(false));
        assert_eq!(command.display(), "python3 main.py --listen 0.0.0.0 --port 8188");
        assert_eq!(command.cwd, Some(PathBuf::from("/opt/pm/ComfyUI")));
        assert!(!command.quiet);
    }

    #[test]
    fn test_flags_per_mode() {
        let flags = |mode, lowvram| build_command(mode, &options(lowvram)).args[5..].to_vec();
        assert_eq!(flags(LaunchMode::Cpu, false), vec!["--cpu"]);
        assert_eq!(flags(LaunchMode::Amd, true), vec!["--cpu"]);
        assert_eq!(flags(LaunchMode::AppleSilicon, false), vec!["--mps"]);
        assert_eq!(flags(LaunchMode::AppleSilicon, true), vec!["--mps"]);
        assert!(flags(LaunchMode::Nvidia, false).is_empty());
        assert_eq!(flags(LaunchMode::Nvidia, true), vec!["--lowvram", "--cpu-vae"]);
    }
}
