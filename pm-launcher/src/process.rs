//! Running ComfyUI as a child process.

use crate::command::LaunchCommand;
use pm_core::error::{PmError, Result};
use pm_core::{pm_info, pm_println, pm_progress, pm_warning};
use pm_messages::{msg, MESSAGES};
use std::future::Future;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use tokio::process::{Child, Command};
use tokio::signal;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct RunSettings {
    pub warmup: Duration,
    pub open_browser: bool,
    pub url: String,
}

/// How the launcher session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    /// ComfyUI exited on its own with this code
    Exited(Option<i32>),
    /// The user pressed Ctrl+C and the child was asked to stop
    Interrupted,
}

/// Starts `command`, opens the browser after the warm-up and waits until
/// ComfyUI exits or the user presses Ctrl+C.
pub async fn run(command: &LaunchCommand, settings: &RunSettings) -> Result<ExitOutcome> {
    run_until(command, settings, ctrl_c(), |url| {
        pm_platform::current().open_browser(url).map_err(PmError::from)
    })
    .await
}

async fn ctrl_c() {
    if let Err(e) = signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}

/// [`run`] with the interrupt source and browser opener supplied by the caller.
pub async fn run_until<I, B>(
    command: &LaunchCommand,
    settings: &RunSettings,
    interrupt: I,
    open_browser: B,
) -> Result<ExitOutcome>
where
    I: Future<Output = ()>,
    B: FnOnce(&str) -> Result<()>,
{
    let mut child = spawn(command)?;
    tokio::pin!(interrupt);

    if !settings.warmup.is_zero() {
        pm_info!(
            "{}",
            msg!(MESSAGES.launcher.waiting, seconds = settings.warmup.as_secs().to_string())
        );
    }

    tokio::select! {
        status = child.wait() => return Ok(exited(status?)),
        _ = &mut interrupt => {
            terminate(&mut child).await;
            return Ok(ExitOutcome::Interrupted);
        }
        _ = tokio::time::sleep(settings.warmup) => {}
    }

    if settings.open_browser {
        pm_progress!("{}", msg!(MESSAGES.launcher.opening_browser, url = settings.url.clone()));
        if let Err(e) = open_browser(&settings.url) {
            pm_warning!(
                "{}",
                msg!(
                    MESSAGES.launcher.browser_failed,
                    error = e.to_string(),
                    url = settings.url.clone()
                )
            );
        }
    }
    pm_println!("{}", msg!(MESSAGES.launcher.running, url = settings.url.clone()));

    tokio::select! {
        status = child.wait() => Ok(exited(status?)),
        _ = &mut interrupt => {
            terminate(&mut child).await;
            Ok(ExitOutcome::Interrupted)
        }
    }
}

fn spawn(command: &LaunchCommand) -> Result<Child> {
    debug!(command = %command.display(), cwd = ?command.cwd, "spawning ComfyUI");
    let mut process = Command::new(&command.program);
    process.args(&command.args).stdin(Stdio::null());
    if let Some(dir) = &command.cwd {
        process.current_dir(dir);
    }
    process
        .spawn()
        .map_err(|e| {
            PmError::Command(msg!(MESSAGES.launcher.start_failed, error = e.to_string()))
        })
}

fn exited(status: ExitStatus) -> ExitOutcome {
    info!(code = ?status.code(), "ComfyUI exited");
    ExitOutcome::Exited(status.code())
}

/// Asks the child to stop and reaps it.
async fn terminate(child: &mut Child) {
    pm_println!("{}", MESSAGES.launcher.stopping);
    request_stop(child);
    match child.wait().await {
        Ok(status) => debug!(code = ?status.code(), "ComfyUI stopped"),
        Err(e) => warn!(error = %e, "failed to wait for ComfyUI"),
    }
}

#[cfg(unix)]
fn request_stop(child: &mut Child) {
    use nix::sys::signal::{kill, Signal};
    use nix::unistd::Pid;

    let Some(id) = child.id() else {
        return;
    };
    if let Err(e) = kill(Pid::from_raw(id as i32), Signal::SIGTERM) {
        warn!(pid = id, error = %e, "SIGTERM failed, killing ComfyUI");
        let _ = child.start_kill();
    }
}

#[cfg(not(unix))]
fn request_stop(child: &mut Child) {
    if let Err(e) = child.start_kill() {
        warn!(error = %e, "failed to stop ComfyUI");
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn shell(script: &str, cwd: PathBuf) -> LaunchCommand {
        LaunchCommand::new("sh", ["-c", script]).current_dir(cwd)
    }

    fn settings(warmup: Duration) -> RunSettings {
        RunSettings {
            warmup,
            open_browser: true,
            url: "http://localhost:8188".to_string(),
        }
    }

    #[tokio::test]
    async fn test_child_exit_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let outcome = run_until(
            &shell("exit 3", temp_dir.path().to_path_buf()),
            &settings(Duration::ZERO),
            std::future::pending(),
            |_| Ok(()),
        )
        .await
        .unwrap();

        assert_eq!(outcome, ExitOutcome::Exited(Some(3)));
    }

    #[tokio::test]
    async fn test_early_exit_skips_browser() {
        let temp_dir = TempDir::new().unwrap();
        let opened = Cell::new(false);
        let outcome = run_until(
            &shell("exit 0", temp_dir.path().to_path_buf()),
            &settings(Duration::from_secs(30)),
            std::future::pending(),
            |_| {
                opened.set(true);
                Ok(())
            },
        )
        .await
        .unwrap();

        assert_eq!(outcome, ExitOutcome::Exited(Some(0)));
        assert!(!opened.get());
    }

    #[tokio::test]
    async fn test_runs_in_app_directory() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("main.py"), "").unwrap();
        let outcome = run_until(
            &shell("test -f main.py", temp_dir.path().to_path_buf()),
            &settings(Duration::from_secs(30)),
            std::future::pending(),
            |_| Ok(()),
        )
        .await
        .unwrap();

        assert_eq!(outcome, ExitOutcome::Exited(Some(0)));
    }

    #[tokio::test]
    async fn test_interrupt_terminates_child() {
        let temp_dir = TempDir::new().unwrap();
        let interrupt = tokio::time::sleep(Duration::from_millis(200));
        let outcome = run_until(
            &shell("sleep 30", temp_dir.path().to_path_buf()),
            &settings(Duration::ZERO),
            interrupt,
            |_| Ok(()),
        )
        .await
        .unwrap();

        assert_eq!(outcome, ExitOutcome::Interrupted);
    }

    #[tokio::test]
    async fn test_browser_failure_is_not_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let interrupt = tokio::time::sleep(Duration::from_millis(200));
        let outcome = run_until(
            &shell("sleep 30", temp_dir.path().to_path_buf()),
            &settings(Duration::ZERO),
            interrupt,
            |_| Err(PmError::Command("no browser".to_string())),
        )
        .await
        .unwrap();

        assert_eq!(outcome, ExitOutcome::Interrupted);
    }

    #[tokio::test]
    async fn test_missing_program_is_command_error() {
        let temp_dir = TempDir::new().unwrap();
        let command = LaunchCommand::new("definitely_does_not_exist_command_12345", Vec::<String>::new())
            .current_dir(temp_dir.path());
        let result = run_until(&command, &settings(Duration::ZERO), std::future::pending(), |_| Ok(())).await;
        assert!(matches!(result, Err(PmError::Command(_))));
    }
}
