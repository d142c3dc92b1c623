use pm_detector::GpuKind;
use pm_messages::MESSAGES;
use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeFlags {
    pub cpu: bool,
    pub gpu: bool,
    pub mps: bool,
}

/// Hardware mode ComfyUI is started in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchMode {
    Cpu,
    Nvidia,
    AppleSilicon,
    /// AMD host running the CPU build of the runtime
    Amd,
}

impl LaunchMode {
    /// `--cpu` wins over `--mps`; otherwise `detect` decides. `detect` only
    /// runs when no flag forces the mode.
    pub fn resolve<F>(flags: ModeFlags, detect: F) -> Self
    where
        F: FnOnce() -> GpuKind,
    {
        if flags.cpu {
            LaunchMode::Cpu
        } else if flags.mps {
            LaunchMode::AppleSilicon
        } else {
            Self::from(detect())
        }
    }

    pub fn uses_cpu(&self) -> bool {
        matches!(self, LaunchMode::Cpu | LaunchMode::Amd)
    }

    pub fn description(&self) -> &'static str {
        match self {
            LaunchMode::Cpu => MESSAGES.launcher.mode_cpu,
            LaunchMode::Nvidia => MESSAGES.launcher.mode_nvidia,
            LaunchMode::AppleSilicon => MESSAGES.launcher.mode_apple,
            LaunchMode::Amd => MESSAGES.launcher.mode_amd,
        }
    }
}

impl From<GpuKind> for LaunchMode {
    fn from(gpu: GpuKind) -> Self {
        match gpu {
            GpuKind::Nvidia => LaunchMode::Nvidia,
            GpuKind::AppleSilicon => LaunchMode::AppleSilicon,
            GpuKind::Amd => LaunchMode::Amd,
            GpuKind::CpuOnly => LaunchMode::Cpu,
        }
    }
}

/// Time given to ComfyUI before the browser is opened.
pub fn warmup_delay(mode: LaunchMode) -> Duration {
    if mode.uses_cpu() {
        Duration::from_secs(20)
    } else {
        Duration::from_secs(10)
    }
}
