//! GPU classification.
//!
//! Detection is split into a probing step that talks to the host through
//! [`CommandProber`] and a pure [`classify`] step that applies the tie-break:
//! Apple Silicon first, then NVIDIA, then AMD, otherwise CPU only.

use crate::host::{detect_host, HostInfo, HostOs};
use pm_core::{CommandOutput, CommandRunner, CommandSpec, SystemRunner};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// GPU classification used to pick install and launch parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GpuKind {
    Nvidia,
    AppleSilicon,
    Amd,
    CpuOnly,
}

impl GpuKind {
    pub const ALL: [GpuKind; 4] = [
        GpuKind::Nvidia,
        GpuKind::AppleSilicon,
        GpuKind::Amd,
        GpuKind::CpuOnly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GpuKind::Nvidia => "nvidia",
            GpuKind::AppleSilicon => "apple-silicon",
            GpuKind::Amd => "amd",
            GpuKind::CpuOnly => "cpu-only",
        }
    }

    pub fn is_gpu(&self) -> bool {
        !matches!(self, GpuKind::CpuOnly)
    }
}

impl fmt::Display for GpuKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw signals gathered from the host before classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub apple_silicon: bool,
    pub nvidia_smi_ok: bool,
    pub amd_vga_listed: bool,
}

/// Runs a probe command and reports what it printed.
///
/// Returns `None` only when the program is missing or cannot be started; the
/// exit status is left to the caller.
pub trait CommandProber {
    fn output(&self, program: &str, args: &[&str]) -> Option<CommandOutput>;
}

/// Probes the real host with captured output.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProber;

impl CommandProber for SystemProber {
    fn output(&self, program: &str, args: &[&str]) -> Option<CommandOutput> {
        let spec = CommandSpec::new(program, args.iter().copied()).quiet();
        match SystemRunner.execute(&spec) {
            Ok(output) => {
                debug!(command = %spec.display(), code = ?output.code, "probe finished");
                Some(output)
            }
            Err(e) => {
                debug!(command = %spec.display(), error = %e, "probe could not run");
                None
            }
        }
    }
}

/// Gathers GPU signals for `host`.
///
/// Apple Silicon is decided from the host alone and skips every command
/// probe. `lspci` is only consulted on Linux.
pub fn probe(host: &HostInfo, prober: &dyn CommandProber) -> ProbeOutcome {
    if host.is_apple_silicon() {
        return ProbeOutcome {
            apple_silicon: true,
            ..ProbeOutcome::default()
        };
    }

    // nvidia-smi counts on exit status alone; lspci listings are scanned
    // even when it exits non-zero
    let nvidia_smi_ok = prober
        .output("nvidia-smi", &[])
        .is_some_and(|output| output.success);
    let amd_vga_listed = host.os == HostOs::Linux
        && prober
            .output("lspci", &[])
            .is_some_and(|output| lists_amd_vga(&output.stdout));

    ProbeOutcome {
        apple_silicon: false,
        nvidia_smi_ok,
        amd_vga_listed,
    }
}

fn lists_amd_vga(listing: &str) -> bool {
    listing.contains("VGA") && listing.contains("AMD")
}

/// Applies the tie-break to a set of probe signals.
pub fn classify(outcome: &ProbeOutcome) -> GpuKind {
    if outcome.apple_silicon {
        GpuKind::AppleSilicon
    } else if outcome.nvidia_smi_ok {
        GpuKind::Nvidia
    } else if outcome.amd_vga_listed {
        GpuKind::Amd
    } else {
        GpuKind::CpuOnly
    }
}

/// Classifies the GPU of the running host.
pub fn detect_gpu() -> GpuKind {
    let host = detect_host();
    let outcome = probe(&host, &SystemProber);
    let kind = classify(&outcome);
    debug!(os = %host.os, arch = %host.arch, ?outcome, gpu = %kind, "GPU detection finished");
    kind
}
