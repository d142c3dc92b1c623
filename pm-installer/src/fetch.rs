//! Cloning ComfyUI and the custom nodes, and preparing model directories.

use crate::provision::pip_install;
use pm_config::InstallLayout;
use pm_core::error::{PmError, Result};
use pm_core::{pm_info, pm_success, pm_warning, CommandRunner, CommandSpec};
use pm_detector::PythonInterpreter;
use pm_messages::{msg, MESSAGES};
use std::fs;
use std::path::Path;
use tracing::{debug, info_span, warn};

/// A git repository cloned into the install layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Repository {
    pub name: &'static str,
    pub url: &'static str,
}

pub const APP_REPOSITORY: Repository = Repository {
    name: "ComfyUI",
    url: "https://github.com/comfyanonymous/ComfyUI.git",
};

pub const CUSTOM_NODES: [Repository; 4] = [
    Repository {
        name: "ComfyUI-Manager",
        url: "https://github.com/ltdrdata/ComfyUI-Manager.git",
    },
    Repository {
        name: "ComfyUI_essentials",
        url: "https://github.com/cubiq/ComfyUI_essentials.git",
    },
    Repository {
        name: "rgthree-comfy",
        url: "https://github.com/rgthree/rgthree-comfy.git",
    },
    Repository {
        name: "was-node-suite-comfyui",
        url: "https://github.com/WASasquatch/was-node-suite-comfyui.git",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloneStatus {
    Cloned,
    AlreadyPresent,
}

/// Which repositories were cloned, kept or skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchReport {
    pub cloned: Vec<String>,
    pub present: Vec<String>,
    pub failed: Vec<String>,
}

impl FetchReport {
    fn record(&mut self, name: &str, status: CloneStatus) {
        match status {
            CloneStatus::Cloned => self.cloned.push(name.to_string()),
            CloneStatus::AlreadyPresent => self.present.push(name.to_string()),
        }
    }
}

fn git_clone(repo: &Repository, dest: &Path) -> CommandSpec {
    CommandSpec::new(
        "git",
        [
            "clone".to_string(),
            repo.url.to_string(),
            dest.display().to_string(),
        ],
    )
}

/// Clones `repo` into `dest` unless something already lives there.
fn clone_if_absent(runner: &dyn CommandRunner, repo: &Repository, dest: &Path) -> Result<CloneStatus> {
    if dest.exists() {
        debug!(repo = repo.name, dest = %dest.display(), "checkout already present");
        return Ok(CloneStatus::AlreadyPresent);
    }
    runner.run_checked(&git_clone(repo, dest))?;
    Ok(CloneStatus::Cloned)
}

/// Installs `requirements` when it exists. Returns whether pip succeeded.
fn install_requirements(
    runner: &dyn CommandRunner,
    python: &PythonInterpreter,
    requirements: &Path,
) -> Option<bool> {
    if !requirements.is_file() {
        return None;
    }
    let spec = pip_install(python, ["-r".to_string(), requirements.display().to_string()]).quiet();
    match runner.run_checked(&spec) {
        Ok(_) => Some(true),
        Err(e) => {
            warn!(requirements = %requirements.display(), error = %e, "requirements install failed");
            Some(false)
        }
    }
}

/// Clones ComfyUI and installs its requirements.
///
/// A failed clone is fatal. A failed requirements install is only reported.
pub fn fetch_app(
    runner: &dyn CommandRunner,
    python: &PythonInterpreter,
    layout: &InstallLayout,
    report: &mut FetchReport,
) -> Result<CloneStatus> {
    let _span = info_span!("fetch_app").entered();
    let status = match clone_if_absent(runner, &APP_REPOSITORY, &layout.app_dir()) {
        Ok(status) => status,
        Err(e) => {
            report.failed.push(APP_REPOSITORY.name.to_string());
            return Err(PmError::Command(msg!(
                MESSAGES.installer.app_clone_failed,
                error = e.to_string()
            )));
        }
    };
    report.record(APP_REPOSITORY.name, status);
    match status {
        CloneStatus::Cloned => pm_success!("{}", MESSAGES.installer.app_cloned),
        CloneStatus::AlreadyPresent => pm_info!("{}", MESSAGES.installer.app_present),
    }

    match install_requirements(runner, python, &layout.app_requirements()) {
        Some(true) => pm_success!("{}", MESSAGES.installer.app_requirements_ok),
        Some(false) => pm_warning!("{}", MESSAGES.installer.app_requirements_failed),
        None => debug!("ComfyUI has no requirements.txt"),
    }
    Ok(status)
}

/// Clones every custom node, skipping the ones that fail.
pub fn fetch_custom_nodes(
    runner: &dyn CommandRunner,
    python: &PythonInterpreter,
    layout: &InstallLayout,
    report: &mut FetchReport,
) -> Result<()> {
    let _span = info_span!("fetch_custom_nodes").entered();
    fs::create_dir_all(layout.custom_nodes_dir())?;

    for repo in &CUSTOM_NODES {
        let dest = layout.custom_node_dir(repo.name);
        match clone_if_absent(runner, repo, &dest) {
            Ok(CloneStatus::Cloned) => {
                pm_success!("{}", msg!(MESSAGES.installer.node_cloned, name = repo.name));
                report.record(repo.name, CloneStatus::Cloned);
                // Plugin requirements are best effort
                let _ = install_requirements(runner, python, &dest.join("requirements.txt"));
            }
            Ok(CloneStatus::AlreadyPresent) => {
                pm_info!("{}", msg!(MESSAGES.installer.node_present, name = repo.name));
                report.record(repo.name, CloneStatus::AlreadyPresent);
            }
            Err(e) => {
                warn!(node = repo.name, error = %e, "custom node clone failed");
                pm_warning!("{}", msg!(MESSAGES.installer.node_failed, name = repo.name));
                report.failed.push(repo.name.to_string());
            }
        }
    }
    Ok(())
}

/// Creates `models/{unet,vae,clip}` and prints where the weights go.
pub fn prepare_model_dirs(layout: &InstallLayout) -> Result<()> {
    for dir in layout.model_dirs() {
        fs::create_dir_all(&dir)?;
    }
    pm_info!(
        "{}",
        msg!(
            MESSAGES.installer.models_manual,
            models_dir = layout.models_dir().display().to_string()
        )
    );
    Ok(())
}
