use crate::gpu::{CommandProber, SystemProber};
use std::fmt;
use tracing::debug;
use which::which;

/// Environment variable that pins the Python interpreter to use.
pub const PYTHON_OVERRIDE_VAR: &str = "PM_PYTHON";

/// Check if a command is available in the system PATH.
///
/// # Examples
/// ```rust
/// use pm_detector::has_command;
///
/// if has_command("git") {
///     println!("Git is installed");
/// }
/// ```
pub fn has_command(cmd: &str) -> bool {
    which(cmd).is_ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PythonVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl PythonVersion {
    /// Parses the output of `python --version`, e.g. `Python 3.11.4`.
    ///
    /// Pre-release suffixes such as `3.13.0rc1` keep their numeric prefix.
    pub fn parse(output: &str) -> Option<Self> {
        let version = output
            .split_whitespace()
            .skip_while(|word| *word != "Python")
            .nth(1)?;
        let mut parts = version.split('.').map(|part| {
            part.chars()
                .take_while(char::is_ascii_digit)
                .collect::<String>()
                .parse::<u32>()
                .ok()
        });
        let major = parts.next()??;
        let minor = parts.next()??;
        let patch = parts.next().flatten().unwrap_or(0);
        Some(Self {
            major,
            minor,
            patch,
        })
    }

    pub fn at_least(&self, major: u32, minor: u32) -> bool {
        (self.major, self.minor) >= (major, minor)
    }
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// A Python interpreter found on the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PythonInterpreter {
    /// Program name or path used to invoke it
    pub program: String,
    pub version: PythonVersion,
}

/// Finds the Python interpreter to provision with.
///
/// `PM_PYTHON` wins when set; otherwise the platform's candidates are tried
/// in order and the first one that reports a version is used.
pub fn detect_python() -> Option<PythonInterpreter> {
    let override_program = std::env::var(PYTHON_OVERRIDE_VAR)
        .ok()
        .filter(|value| !value.trim().is_empty());
    let platform = pm_platform::current();
    find_python(
        override_program.as_deref(),
        platform.python_candidates(),
        &SystemProber,
    )
}

/// Interpreter lookup behind [`detect_python`].
pub fn find_python(
    override_program: Option<&str>,
    candidates: &[&str],
    prober: &dyn CommandProber,
) -> Option<PythonInterpreter> {
    let programs: Vec<&str> = match override_program {
        Some(program) => vec![program],
        None => candidates.to_vec(),
    };

    programs.into_iter().find_map(|program| {
        let output = prober.output(program, &["--version"])?;
        if !output.success {
            return None;
        }
        // older interpreters print the version on stderr
        let version = PythonVersion::parse(&format!("{}{}", output.stdout, output.stderr));
        debug!(program, ?version, "probed python interpreter");
        version.map(|version| PythonInterpreter {
            program: program.to_string(),
            version,
        })
    })
}
