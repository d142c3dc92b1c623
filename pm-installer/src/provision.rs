//! PyTorch and auxiliary package installation through pip.

use pm_core::error::Result;
use pm_core::{pm_success, pm_warning, CommandRunner, CommandSpec};
use pm_detector::{GpuKind, PythonInterpreter};
use pm_messages::{msg, MESSAGES};
use tracing::{info, info_span, warn};

const TORCH_INDEX_CPU: &str = "https://download.pytorch.org/whl/cpu";
const TORCH_INDEX_CU118: &str = "https://download.pytorch.org/whl/cu118";

/// Packages installed one at a time after the runtime.
pub const AUX_PACKAGES: [&str; 15] = [
    "numpy<2",
    "pillow>=9.5.0",
    "opencv-python-headless>=4.8.0",
    "transformers>=4.25.0",
    "accelerate>=0.21.0",
    "safetensors>=0.3.1",
    "diffusers>=0.21.0",
    "psutil",
    "einops",
    "pyyaml",
    "scipy",
    "tqdm",
    "huggingface-hub",
    "requests",
    "aiohttp",
];

/// One fixed PyTorch install command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeTemplate {
    pub packages: &'static [&'static str],
    pub index_url: Option<&'static str>,
}

impl RuntimeTemplate {
    pub const CPU: RuntimeTemplate = RuntimeTemplate {
        packages: &["torch==2.1.0+cpu", "torchvision==0.16.0+cpu", "torchaudio==2.1.0+cpu"],
        index_url: Some(TORCH_INDEX_CPU),
    };

    pub const CUDA: RuntimeTemplate = RuntimeTemplate {
        packages: &[
            "torch==2.1.0+cu118",
            "torchvision==0.16.0+cu118",
            "torchaudio==2.1.0+cu118",
        ],
        index_url: Some(TORCH_INDEX_CU118),
    };

    pub const APPLE: RuntimeTemplate = RuntimeTemplate {
        packages: &["torch==2.1.0", "torchvision==0.16.0", "torchaudio==2.1.0"],
        index_url: None,
    };

    /// AMD hosts get the CPU build.
    pub fn for_gpu(gpu: GpuKind) -> Self {
        match gpu {
            GpuKind::Nvidia => Self::CUDA,
            GpuKind::AppleSilicon => Self::APPLE,
            GpuKind::Amd | GpuKind::CpuOnly => Self::CPU,
        }
    }

    /// Arguments following `pip install`.
    pub fn pip_args(&self) -> Vec<String> {
        let mut args: Vec<String> = self.packages.iter().map(|p| p.to_string()).collect();
        if let Some(index) = self.index_url {
            args.push("--index-url".to_string());
            args.push(index.to_string());
        }
        args
    }
}

/// `<python> -m pip install <args>`
pub fn pip_install<I, S>(python: &PythonInterpreter, args: I) -> CommandSpec
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut full: Vec<String> = vec!["-m".into(), "pip".into(), "install".into()];
    full.extend(args.into_iter().map(Into::into));
    CommandSpec::new(python.program.clone(), full)
}

/// Outcome of the auxiliary package step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvisionReport {
    pub installed: Vec<String>,
    pub failed: Vec<String>,
}

impl ProvisionReport {
    pub fn total(&self) -> usize {
        self.installed.len() + self.failed.len()
    }

    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Installs the runtime. Any failure is returned to the caller.
pub fn install_runtime(
    runner: &dyn CommandRunner,
    python: &PythonInterpreter,
    template: &RuntimeTemplate,
) -> Result<()> {
    let _span = info_span!("install_runtime", index = ?template.index_url).entered();
    runner.run_checked(&pip_install(python, template.pip_args()))?;
    info!(packages = ?template.packages, "runtime installed");
    Ok(())
}

/// Installs [`AUX_PACKAGES`] one by one, skipping failures.
pub fn install_aux_packages(runner: &dyn CommandRunner, python: &PythonInterpreter) -> ProvisionReport {
    let _span = info_span!("install_aux_packages").entered();
    let mut report = ProvisionReport::default();

    for package in AUX_PACKAGES {
        let spec = pip_install(python, [package]).quiet();
        match runner.run_checked(&spec) {
            Ok(_) => {
                pm_success!("{}", msg!(MESSAGES.installer.dep_installed, package = package));
                report.installed.push(package.to_string());
            }
            Err(e) => {
                warn!(package, error = %e, "package install failed");
                pm_warning!("{}", msg!(MESSAGES.installer.dep_failed, package = package));
                report.failed.push(package.to_string());
            }
        }
    }
    report
}
