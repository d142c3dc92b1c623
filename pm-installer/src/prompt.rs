use dialoguer::Confirm;
use pm_core::error::{PmError, Result};
use pm_detector::GpuKind;
use std::fmt;

/// Whether the runtime is installed for the GPU or for the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeMode {
    Gpu,
    Cpu,
}

impl RuntimeMode {
    /// Classification used for template selection. CPU mode always maps to
    /// the cpu-only build regardless of what was detected.
    pub fn effective_gpu(&self, detected: GpuKind) -> GpuKind {
        match self {
            RuntimeMode::Gpu => detected,
            RuntimeMode::Cpu => GpuKind::CpuOnly,
        }
    }
}

impl fmt::Display for RuntimeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeMode::Gpu => f.write_str("GPU"),
            RuntimeMode::Cpu => f.write_str("CPU"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeFlags {
    pub cpu: bool,
    pub gpu: bool,
    pub yes: bool,
}

/// How the mode was chosen, for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeSource {
    Flags,
    Prompt,
    Assumed,
    NoGpu,
}

/// Picks the runtime mode.
///
/// Explicit flags win (`--gpu` only counts without `--cpu`). Without flags a
/// detected GPU is confirmed through `confirm` unless `--yes` was given, and
/// a host without a GPU gets CPU mode.
pub fn decide_mode<F>(flags: ModeFlags, detected: GpuKind, confirm: F) -> Result<(RuntimeMode, ModeSource)>
where
    F: FnOnce() -> Result<bool>,
{
    if flags.cpu || flags.gpu {
        let mode = if flags.gpu && !flags.cpu {
            RuntimeMode::Gpu
        } else {
            RuntimeMode::Cpu
        };
        return Ok((mode, ModeSource::Flags));
    }

    if !detected.is_gpu() {
        return Ok((RuntimeMode::Cpu, ModeSource::NoGpu));
    }
    if flags.yes {
        return Ok((RuntimeMode::Gpu, ModeSource::Assumed));
    }

    let mode = if confirm()? {
        RuntimeMode::Gpu
    } else {
        RuntimeMode::Cpu
    };
    Ok((mode, ModeSource::Prompt))
}

/// Answer taken when the GPU question is dismissed with Enter.
pub const GPU_PROMPT_DEFAULT: bool = false;

/// Interactive yes/no question. Enter alone declines.
pub fn confirm_prompt(message: &str) -> Result<bool> {
    Confirm::new()
        .with_prompt(message)
        .default(GPU_PROMPT_DEFAULT)
        .interact()
        .map_err(|e| PmError::Internal(format!("Failed to read input: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn never_asked() -> Result<bool> {
        panic!("prompt should not be shown");
    }

    #[test]
    fn test_flags_override_detection() {
        let gpu = ModeFlags {
            gpu: true,
            ..ModeFlags::default()
        };
        let cpu = ModeFlags {
            cpu: true,
            ..ModeFlags::default()
        };
        let both = ModeFlags {
            cpu: true,
            gpu: true,
            yes: false,
        };

        assert_eq!(
            decide_mode(gpu, GpuKind::CpuOnly, never_asked).unwrap(),
            (RuntimeMode::Gpu, ModeSource::Flags)
        );
        assert_eq!(
            decide_mode(cpu, GpuKind::Nvidia, never_asked).unwrap().0,
            RuntimeMode::Cpu
        );
        assert_eq!(
            decide_mode(both, GpuKind::Nvidia, never_asked).unwrap().0,
            RuntimeMode::Cpu
        );
    }

    #[test]
    fn test_empty_answer_declines_gpu() {
        let mode = decide_mode(ModeFlags::default(), GpuKind::Nvidia, || Ok(GPU_PROMPT_DEFAULT)).unwrap();
        assert_eq!(mode, (RuntimeMode::Cpu, ModeSource::Prompt));
    }

    #[test]
    fn test_no_gpu_selects_cpu_without_prompt() {
        assert_eq!(
            decide_mode(ModeFlags::default(), GpuKind::CpuOnly, never_asked).unwrap(),
            (RuntimeMode::Cpu, ModeSource::NoGpu)
        );
    }

    #[test]
    fn test_prompt_answer_is_used() {
        let accepted = decide_mode(ModeFlags::default(), GpuKind::Amd, || Ok(true)).unwrap();
        assert_eq!(accepted, (RuntimeMode::Gpu, ModeSource::Prompt));

        let declined = decide_mode(ModeFlags::default(), GpuKind::Nvidia, || Ok(false)).unwrap();
        assert_eq!(declined, (RuntimeMode::Cpu, ModeSource::Prompt));
    }

    #[test]
    fn test_yes_skips_prompt() {
        let flags = ModeFlags {
            yes: true,
            ..ModeFlags::default()
        };
        assert_eq!(
            decide_mode(flags, GpuKind::AppleSilicon, never_asked).unwrap(),
            (RuntimeMode::Gpu, ModeSource::Assumed)
        );
    }

    #[test]
    fn test_effective_gpu() {
        assert_eq!(RuntimeMode::Cpu.effective_gpu(GpuKind::Nvidia), GpuKind::CpuOnly);
        assert_eq!(RuntimeMode::Gpu.effective_gpu(GpuKind::Nvidia), GpuKind::Nvidia);
        assert_eq!(RuntimeMode::Gpu.effective_gpu(GpuKind::CpuOnly), GpuKind::CpuOnly);
    }
}
