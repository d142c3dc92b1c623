//! Installation sequence.

use crate::fetch::{self, FetchReport};
use crate::launcher;
use crate::prerequisites;
use crate::prompt::{decide_mode, ModeFlags, ModeSource, RuntimeMode};
use crate::provision::{self, ProvisionReport, RuntimeTemplate};
use colored::*;
use pm_config::InstallLayout;
use pm_core::error::{PmError, Result};
use pm_core::{pm_info, pm_println, pm_progress, pm_success, pm_warning, CommandRunner};
use pm_detector::{GpuKind, HostInfo, PythonInterpreter};
use pm_messages::{msg, MESSAGES};
use pm_platform::PlatformProvider;
use std::path::PathBuf;
use tracing::{info, info_span, warn};

/// Everything the installer learns about the host before it changes anything.
#[derive(Debug, Clone)]
pub struct Environment {
    pub host: HostInfo,
    pub gpu: GpuKind,
    pub python: Option<PythonInterpreter>,
    pub git: bool,
}

impl Environment {
    pub fn detect() -> Self {
        Self {
            host: pm_detector::detect_host(),
            gpu: pm_detector::detect_gpu(),
            python: pm_detector::detect_python(),
            git: pm_detector::has_command("git"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InstallOptions {
    pub flags: ModeFlags,
    pub clean: bool,
}

#[derive(Debug, Clone)]
pub struct InstallSummary {
    pub mode: RuntimeMode,
    pub runtime_gpu: GpuKind,
    pub provision: ProvisionReport,
    pub fetch: FetchReport,
    pub launcher: PathBuf,
    pub shortcut: Option<PathBuf>,
}

pub struct Installer<'a> {
    runner: &'a dyn CommandRunner,
    platform: &'a dyn PlatformProvider,
    layout: InstallLayout,
    launch_binary: PathBuf,
}

impl<'a> Installer<'a> {
    pub fn new(
        runner: &'a dyn CommandRunner,
        platform: &'a dyn PlatformProvider,
        layout: InstallLayout,
        launch_binary: PathBuf,
    ) -> Self {
        Self {
            runner,
            platform,
            layout,
            launch_binary,
        }
    }

    /// Runs every step in order. Fatal steps stop the sequence with an error.
    pub fn run<F>(&self, env: &Environment, options: InstallOptions, confirm: F) -> Result<InstallSummary>
    where
        F: FnOnce() -> Result<bool>,
    {
        // launcher scripts and shortcuts outlive the working directory
        let layout = self.layout.to_absolute()?;
        let _span = info_span!("install", root = %layout.root().display()).entered();
        pm_println!("{}", MESSAGES.installer.header);

        if options.clean {
            pm_warning!("{}", MESSAGES.installer.clean_ignored);
        }

        pm_progress!("{}", MESSAGES.installer.checking_prerequisites);
        let python = prerequisites::check_python(env.python.as_ref())?;
        prerequisites::check_git(env.git)?;

        self.report_hardware(env);
        let (mode, source) = decide_mode(options.flags, env.gpu, confirm)?;
        if source == ModeSource::NoGpu {
            pm_info!("{}", MESSAGES.installer.cpu_auto);
        }
        let runtime_gpu = mode.effective_gpu(env.gpu);
        info!(%mode, ?source, gpu = %runtime_gpu, "runtime mode decided");

        pm_progress!("{}", MESSAGES.installer.starting);

        pm_progress!("{}", MESSAGES.installer.runtime_installing);
        pm_info!("{}", msg!(MESSAGES.installer.runtime_mode, mode = mode.to_string()));
        provision::install_runtime(self.runner, python, &RuntimeTemplate::for_gpu(runtime_gpu))
            .map_err(|e| {
                PmError::Command(msg!(MESSAGES.installer.runtime_failed, error = e.to_string()))
            })?;
        pm_success!("{}", MESSAGES.installer.runtime_installed);

        pm_progress!("{}", MESSAGES.installer.deps_installing);
        let provision = provision::install_aux_packages(self.runner, python);
        pm_info!(
            "{}",
            msg!(
                MESSAGES.installer.deps_done,
                installed = provision.installed.len().to_string(),
                total = provision.total().to_string()
            )
        );

        let mut fetch_report = FetchReport::default();
        pm_progress!("{}", MESSAGES.installer.app_setup);
        fetch::fetch_app(self.runner, python, &layout, &mut fetch_report)?;

        pm_progress!("{}", MESSAGES.installer.nodes_installing);
        fetch::fetch_custom_nodes(self.runner, python, &layout, &mut fetch_report)?;
        pm_success!("{}", MESSAGES.installer.nodes_done);

        pm_progress!("{}", MESSAGES.installer.models_setup);
        fetch::prepare_model_dirs(&layout)?;

        pm_progress!("{}", MESSAGES.installer.launcher_creating);
        let script = launcher::write_launcher(self.platform, layout.root(), &self.launch_binary)?;
        pm_success!(
            "{}",
            msg!(MESSAGES.installer.launcher_created, path = script.display().to_string())
        );

        let shortcut = match launcher::create_shortcut(self.platform, &script, layout.root()) {
            Ok(Some(path)) => {
                pm_success!("{}", MESSAGES.installer.shortcut_created);
                Some(path)
            }
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "desktop shortcut failed");
                pm_warning!(
                    "{}",
                    msg!(MESSAGES.installer.shortcut_failed, error = format!("{:#}", e))
                );
                None
            }
        };

        let url = msg!(MESSAGES.common.web_ui_url, port = "8188");
        pm_println!(
            "{}",
            msg!(
                MESSAGES.installer.complete,
                launcher = script.display().to_string().cyan().to_string(),
                url = url.bold().to_string()
            )
        );

        Ok(InstallSummary {
            mode,
            runtime_gpu,
            provision,
            fetch: fetch_report,
            launcher: script,
            shortcut,
        })
    }

    fn report_hardware(&self, env: &Environment) {
        pm_progress!("{}", MESSAGES.installer.detecting_hardware);
        pm_println!(
            "{}",
            msg!(
                MESSAGES.installer.system_label,
                os = env.host.os.to_string(),
                arch = env.host.arch.clone()
            )
        );
        let line = match env.gpu {
            GpuKind::Nvidia => MESSAGES.installer.gpu_nvidia,
            GpuKind::AppleSilicon => MESSAGES.installer.gpu_apple,
            GpuKind::Amd => MESSAGES.installer.gpu_amd,
            GpuKind::CpuOnly => MESSAGES.installer.gpu_cpu_only,
        };
        pm_println!("{}", line);
    }
}
