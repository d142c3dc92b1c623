use pm_core::error::{PmError, Result};
use pm_core::{pm_error, pm_success};
use pm_detector::PythonInterpreter;
use pm_messages::{msg, MESSAGES};

pub const MIN_PYTHON: (u32, u32) = (3, 8);

/// Requires a Python interpreter of at least [`MIN_PYTHON`].
pub fn check_python(python: Option<&PythonInterpreter>) -> Result<&PythonInterpreter> {
    let Some(python) = python else {
        pm_error!("{}", MESSAGES.installer.python_missing);
        return Err(PmError::Dependency("Python not found".to_string()));
    };

    let version = python.version.to_string();
    if !python.version.at_least(MIN_PYTHON.0, MIN_PYTHON.1) {
        pm_error!("{}", msg!(MESSAGES.installer.python_too_old, version = version.clone()));
        return Err(PmError::Dependency(format!("Python {version} is too old")));
    }

    pm_success!("{}", msg!(MESSAGES.installer.python_ok, version = version));
    Ok(python)
}

/// Requires git on PATH.
pub fn check_git(available: bool) -> Result<()> {
    if !available {
        pm_error!("{}", MESSAGES.installer.git_missing);
        return Err(PmError::Dependency("git not installed".to_string()));
    }
    pm_success!("{}", MESSAGES.installer.git_ok);
    Ok(())
}
