// Standard library
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

// External crates
use crate::error::{PmError, Result};
use duct::cmd;
use tracing::debug;

/// A single external command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
    /// Capture stdout/stderr instead of streaming them to the terminal.
    pub quiet: bool,
}

impl CommandSpec {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: None,
            quiet: false,
        }
    }

    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn quiet(mut self) -> Self {
        self.quiet = true;
        self
    }

    /// Shell-like rendering used in logs and error messages.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Result of a finished command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn succeeded() -> Self {
        Self {
            success: true,
            code: Some(0),
            ..Self::default()
        }
    }

    pub fn failed(code: i32) -> Self {
        Self {
            success: false,
            code: Some(code),
            ..Self::default()
        }
    }
}

/// Seam between the provisioning steps and the processes they spawn.
///
/// `execute` only fails when the program could not be started at all; a
/// non-zero exit is reported through [`CommandOutput::success`].
pub trait CommandRunner {
    fn execute(&self, spec: &CommandSpec) -> Result<CommandOutput>;

    /// Like `execute`, but a non-zero exit becomes [`PmError::Command`].
    fn run_checked(&self, spec: &CommandSpec) -> Result<CommandOutput> {
        let output = self.execute(spec)?;
        if !output.success {
            return Err(PmError::Command(format!(
                "'{}' exited with code {:?}",
                spec.display(),
                output.code
            )));
        }
        Ok(output)
    }
}

/// Runs commands on the host through `duct`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn execute(&self, spec: &CommandSpec) -> Result<CommandOutput> {
        debug!(command = %spec.display(), cwd = ?spec.cwd, quiet = spec.quiet, "running command");

        let mut expression = cmd(&spec.program, &spec.args).unchecked();
        if let Some(dir) = &spec.cwd {
            expression = expression.dir(dir);
        }
        if spec.quiet {
            expression = expression.stdout_capture().stderr_capture();
        }

        let output = expression.run().map_err(|e| match e.kind() {
            ErrorKind::NotFound => PmError::Dependency(format!("'{}' is not installed", spec.program)),
            _ => PmError::Command(format!("Failed to start '{}': {}", spec.display(), e)),
        })?;

        let result = CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        debug!(command = %spec.display(), code = ?result.code, "command finished");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_display() {
        let spec = CommandSpec::new("git", ["clone", "https://example.com/repo.git"]);
        assert_eq!(spec.display(), "git clone https://example.com/repo.git");
        assert!(!spec.quiet);
        assert!(spec.cwd.is_none());
    }

    #[test]
    fn test_spec_builders() {
        let temp_dir = tempfile::tempdir().unwrap();
        let spec = CommandSpec::new("pip", ["install", "einops"])
            .current_dir(temp_dir.path())
            .quiet();
        assert!(spec.quiet);
        assert_eq!(spec.cwd.as_deref(), Some(temp_dir.path()));
    }

    #[test]
    fn test_missing_program_is_dependency_error() {
        let spec = CommandSpec::new("definitely_does_not_exist_command_12345", ["--version"]).quiet();
        let result = SystemRunner.execute(&spec);
        assert!(matches!(result, Err(PmError::Dependency(_))));
    }

    #[test]
    #[cfg(unix)]
    fn test_captures_stdout_and_exit_code() {
        let spec = CommandSpec::new("sh", ["-c", "echo hello; exit 3"]).quiet();
        let output = SystemRunner.execute(&spec).unwrap();
        assert!(!output.success);
        assert_eq!(output.code, Some(3));
        assert_eq!(output.stdout.trim(), "hello");

        let checked = SystemRunner.run_checked(&spec);
        assert!(matches!(checked, Err(PmError::Command(_))));
    }

    #[test]
    #[cfg(unix)]
    fn test_runs_in_working_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join("marker.txt"), "x").unwrap();
        let spec = CommandSpec::new("ls", Vec::<String>::new())
            .current_dir(temp_dir.path())
            .quiet();
        let output = SystemRunner.run_checked(&spec).unwrap();
        assert!(output.stdout.contains("marker.txt"));
    }
}
