use clap::Parser;
use std::path::PathBuf;

/// Install ComfyUI with the Portrait Master custom nodes
#[derive(Parser, Debug)]
#[command(name = "pm-install", author, version, about, long_about = None)]
pub struct Args {
    /// Force CPU mode
    #[arg(long)]
    pub cpu: bool,

    /// Force GPU mode
    #[arg(long)]
    pub gpu: bool,

    /// Clean installation (accepted for compatibility, has no effect)
    #[arg(long)]
    pub clean: bool,

    /// Use a detected GPU without asking
    #[arg(short, long)]
    pub yes: bool,

    /// Install root (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,
}

impl Args {
    pub fn mode_flags(&self) -> crate::prompt::ModeFlags {
        crate::prompt::ModeFlags {
            cpu: self.cpu,
            gpu: self.gpu,
            yes: self.yes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let args = Args::parse_from(["pm-install", "--gpu", "--clean", "--root", "/tmp/pm"]);
        assert!(args.gpu);
        assert!(!args.cpu);
        assert!(args.clean);
        assert!(!args.yes);
        assert_eq!(args.root, Some(PathBuf::from("/tmp/pm")));
    }

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["pm-install"]);
        let flags = args.mode_flags();
        assert!(!flags.cpu && !flags.gpu && !flags.yes);
        assert!(args.root.is_none());
    }
}
