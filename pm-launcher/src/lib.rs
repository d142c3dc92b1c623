//! Portrait Master launcher.
//!
//! Resolves the hardware mode, builds the ComfyUI command line and runs it
//! until it exits or the user interrupts it.

pub mod cli;
pub mod command;
pub mod mode;
pub mod process;

pub use command::{build_command, LaunchCommand, LaunchOptions, PORT};
pub use mode::{warmup_delay, LaunchMode, ModeFlags};
pub use process::{run, ExitOutcome, RunSettings};
