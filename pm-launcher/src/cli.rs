use crate::mode::ModeFlags;
use clap::Parser;
use std::path::PathBuf;

/// Start ComfyUI and open the Portrait Master web interface
#[derive(Parser, Debug)]
#[command(name = "pm-launch", author, version, about, long_about = None)]
pub struct Args {
    /// Force CPU mode
    #[arg(long)]
    pub cpu: bool,

    /// Use the detected GPU (default)
    #[arg(long)]
    pub gpu: bool,

    /// Low VRAM mode for NVIDIA GPUs
    #[arg(long)]
    pub lowvram: bool,

    /// Force Apple Silicon (MPS) mode
    #[arg(long)]
    pub mps: bool,

    /// Do not open a browser
    #[arg(long)]
    pub no_browser: bool,

    /// Seconds to wait before opening the browser
    #[arg(long, value_name = "SECS")]
    pub wait: Option<u64>,

    /// Install root containing ComfyUI (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,
}

impl Args {
    pub fn mode_flags(&self) -> ModeFlags {
        ModeFlags {
            cpu: self.cpu,
            gpu: self.gpu,
            mps: self.mps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let args = Args::parse_from(["pm-launch", "--lowvram", "--no-browser", "--wait", "3"]);
        assert!(args.lowvram);
        assert!(args.no_browser);
        assert_eq!(args.wait, Some(3));
        assert!(!args.cpu && !args.gpu && !args.mps);
    }
}
