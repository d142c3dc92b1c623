use anyhow::{Context, Result};
use clap::Parser;
use pm_config::{bytes_to_gb, AppConfig, InstallLayout, RamAdvice};
use pm_core::{pm_error, pm_info, pm_println, pm_success, pm_warning};
use pm_messages::{msg, MESSAGES};
use std::path::PathBuf;
use tracing::warn;

/// Write config.json with the default settings and print system advice
#[derive(Debug, Parser)]
#[command(name = "pm-setup", version, about)]
struct Args {
    /// Install root that receives config.json
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,
}

fn main() {
    let _guard = match pm_logging::init_subscriber() {
        Ok(guard) => guard,
        Err(_) => {
            pm_warning!("{}", MESSAGES.common.logging_init_failed);
            None
        }
    };

    let args = Args::parse();
    if let Err(e) = run(args) {
        pm_error!("{}", msg!(MESSAGES.common.error_generic, error = format!("{:#}", e)));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    pm_println!("{}", MESSAGES.setup.header);

    let layout = InstallLayout::from_root_arg(args.root);
    let config_path = layout.config_path();
    AppConfig::default()
        .save_to_path(&config_path)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    pm_success!(
        "{}",
        msg!(MESSAGES.setup.config_written, path = config_path.display().to_string())
    );

    let platform = pm_platform::current();
    pm_println!("{}", msg!(MESSAGES.setup.system_label, system = platform.system_name()));

    match platform.total_memory_bytes() {
        Ok(bytes) => {
            let gb = bytes_to_gb(bytes);
            pm_println!("{}", msg!(MESSAGES.setup.ram_label, ram = format!("{:.1}", gb)));
            match RamAdvice::for_gb(gb) {
                Some(RamAdvice::Limited) => pm_warning!("{}", MESSAGES.setup.ram_limited),
                Some(RamAdvice::Plenty) => pm_info!("{}", MESSAGES.setup.ram_plenty),
                None => {}
            }
        }
        Err(e) => warn!(error = %e, "could not read total memory"),
    }

    pm_println!("{}", MESSAGES.setup.complete);
    Ok(())
}
