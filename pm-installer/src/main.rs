use anyhow::Result;
use clap::Parser;
use pm_config::InstallLayout;
use pm_core::{pm_error, pm_warning, SystemRunner};
use pm_installer::cli::Args;
use pm_installer::installer::{Environment, InstallOptions, Installer};
use pm_installer::launcher::locate_launch_binary;
use pm_installer::prompt::confirm_prompt;
use pm_messages::{msg, MESSAGES};

fn main() {
    let _guard = match pm_logging::init_subscriber() {
        Ok(guard) => guard,
        Err(_) => {
            pm_warning!("{}", MESSAGES.common.logging_init_failed);
            None
        }
    };

    if let Err(e) = run() {
        pm_error!("{}", msg!(MESSAGES.common.error_generic, error = format!("{:#}", e)));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let platform = pm_platform::current();
    let layout = InstallLayout::from_root_arg(args.root.clone());
    let launch_binary = locate_launch_binary(platform.as_ref());
    let runner = SystemRunner;

    let installer = Installer::new(&runner, platform.as_ref(), layout, launch_binary);
    let options = InstallOptions {
        flags: args.mode_flags(),
        clean: args.clean,
    };
    installer.run(&Environment::detect(), options, || {
        confirm_prompt(MESSAGES.installer.use_gpu_prompt)
    })?;
    Ok(())
}
