//! Host, GPU and Python detection.
//!
//! Every probe treats a missing tool or a failing command as "not present";
//! nothing in this crate returns an error for an absent GPU or interpreter.

pub mod gpu;
pub mod host;
pub mod tools;

pub use gpu::{classify, detect_gpu, probe, CommandProber, GpuKind, ProbeOutcome, SystemProber};
pub use host::{detect_host, HostInfo, HostOs};
pub use tools::{
    detect_python, find_python, has_command, PythonInterpreter, PythonVersion, PYTHON_OVERRIDE_VAR,
};
