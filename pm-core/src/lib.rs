pub mod command_stream;
pub mod error;
pub mod output_macros;

pub use command_stream::{CommandOutput, CommandRunner, CommandSpec, SystemRunner};
pub use error::{PmError, Result};
