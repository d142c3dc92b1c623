use anyhow::{bail, Result};
use clap::Parser;
use pm_config::InstallLayout;
use pm_core::{pm_error, pm_info, pm_println, pm_progress, pm_warning};
use pm_launcher::cli::Args;
use pm_launcher::{build_command, run as run_app, warmup_delay, ExitOutcome, LaunchMode, LaunchOptions, RunSettings, PORT};
use pm_messages::{msg, MESSAGES};
use std::time::Duration;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _guard = match pm_logging::init_subscriber() {
        Ok(guard) => guard,
        Err(_) => {
            pm_warning!("{}", MESSAGES.common.logging_init_failed);
            None
        }
    };

    let args = Args::parse();
    match run(args).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            pm_error!("{}", msg!(MESSAGES.common.error_generic, error = format!("{:#}", e)));
            std::process::exit(1);
        }
    }
}

async fn run(args: Args) -> Result<i32> {
    pm_println!("{}", MESSAGES.launcher.header);

    let layout = InstallLayout::from_root_arg(args.root.clone());
    if !layout.app_installed() {
        bail!(msg!(
            MESSAGES.launcher.app_missing,
            path = layout.app_dir().display().to_string()
        ));
    }

    let mode = LaunchMode::resolve(args.mode_flags(), pm_detector::detect_gpu);
    pm_info!("{}", mode.description());

    let app_dir = layout.app_dir();
    pm_progress!("{}", MESSAGES.launcher.starting);
    pm_println!(
        "{}",
        msg!(MESSAGES.launcher.directory, path = app_dir.display().to_string())
    );
    let command = build_command(
        mode,
        &LaunchOptions {
            python: python_program(),
            app_dir,
            lowvram: args.lowvram,
        },
    );
    pm_println!("{}", msg!(MESSAGES.launcher.command, command = command.display()));

    let settings = RunSettings {
        warmup: args
            .wait
            .map(Duration::from_secs)
            .unwrap_or_else(|| warmup_delay(mode)),
        open_browser: !args.no_browser,
        url: msg!(MESSAGES.common.web_ui_url, port = PORT.to_string()),
    };

    let code = match run_app(&command, &settings).await? {
        ExitOutcome::Interrupted | ExitOutcome::Exited(Some(0)) => 0,
        ExitOutcome::Exited(code) => {
            let code = code.unwrap_or(1);
            pm_warning!("{}", msg!(MESSAGES.launcher.exited, code = code.to_string()));
            code
        }
    };
    Ok(code)
}

/// Interpreter found by the detector, or the platform's first candidate.
fn python_program() -> String {
    match pm_detector::detect_python() {
        Some(python) => python.program,
        None => pm_platform::current()
            .python_candidates()
            .first()
            .copied()
            .unwrap_or("python")
            .to_string(),
    }
}
