use std::{
    env,
    io::{self, Write},
    path::{Path, PathBuf},
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    prelude::*,
    registry,
    util::TryInitError,
    EnvFilter,
};

const DEFAULT_LOG_FILE: &str = "portrait-master.log";

// --- Custom "Tee" Writer ---
struct Tee<A, B> {
    a: A,
    b: B,
}

impl<A, B> Write for Tee<A, B>
where
    A: Write,
    B: Write,
{
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let res_a = self.a.write(buf);
        let res_b = self.b.write(buf);
        res_a.or(res_b)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.a.flush()?;
        self.b.flush()
    }
}

#[derive(Clone)]
struct MakeTee<A, B> {
    make_a: A,
    make_b: B,
}

impl<'a, A, B> MakeWriter<'a> for MakeTee<A, B>
where
    A: MakeWriter<'a>,
    B: MakeWriter<'a>,
{
    type Writer = Tee<A::Writer, B::Writer>;

    fn make_writer(&'a self) -> Self::Writer {
        Tee {
            a: self.make_a.make_writer(),
            b: self.make_b.make_writer(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Human,
    Compact,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    Console,
    File,
    Both,
    Off,
}

/// Logging knobs read from `LOG_LEVEL`, `LOG_FORMAT`, `LOG_OUTPUT` and
/// `LOG_FILE_PATH`. `RUST_LOG` still wins over `LOG_LEVEL` when set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: String,
    pub format: LogFormat,
    pub output: LogOutput,
    pub file_path: PathBuf,
}

impl LogSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let level = lookup("LOG_LEVEL").unwrap_or_else(|| "warn".to_string());
        let format = match lookup("LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            Some("compact") => LogFormat::Compact,
            _ => LogFormat::Human,
        };
        let output = match lookup("LOG_OUTPUT").as_deref() {
            Some("file") => LogOutput::File,
            Some("both") => LogOutput::Both,
            Some("off") | Some("none") => LogOutput::Off,
            _ => LogOutput::Console,
        };
        let file_path = lookup("LOG_FILE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| env::temp_dir().join(DEFAULT_LOG_FILE));

        Self {
            level,
            format,
            output,
            file_path,
        }
    }
}

fn install<W>(format: LogFormat, filter: EnvFilter, writer: W) -> Result<(), TryInitError>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let subscriber = registry().with(filter);
    match format {
        LogFormat::Json => subscriber
            .with(fmt::layer().with_writer(writer).with_ansi(false).json())
            .try_init(),
        LogFormat::Compact => subscriber
            .with(fmt::layer().with_writer(writer).compact())
            .try_init(),
        LogFormat::Human => subscriber
            .with(fmt::layer().with_writer(writer).pretty())
            .try_init(),
    }
}

/// Initializes the global tracing subscriber based on environment variables.
///
/// The returned guard must be held for the lifetime of the program when file
/// output is enabled, otherwise buffered lines are lost on exit.
pub fn init_subscriber() -> Result<Option<WorkerGuard>, TryInitError> {
    init_with_settings(&LogSettings::from_env())
}

pub fn init_with_settings(settings: &LogSettings) -> Result<Option<WorkerGuard>, TryInitError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level));

    let log_dir = settings
        .file_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let log_filename = settings
        .file_path
        .file_name()
        .unwrap_or(DEFAULT_LOG_FILE.as_ref());

    match settings.output {
        LogOutput::Off => Ok(None),
        LogOutput::Console => {
            install(settings.format, env_filter, io::stderr)?;
            Ok(None)
        }
        LogOutput::File => {
            let file_appender = tracing_appender::rolling::daily(log_dir, log_filename);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            install(settings.format, env_filter, non_blocking)?;
            Ok(Some(guard))
        }
        LogOutput::Both => {
            let file_appender = tracing_appender::rolling::daily(log_dir, log_filename);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let tee_writer = MakeTee {
                make_a: io::stderr,
                make_b: non_blocking,
            };
            install(settings.format, env_filter, tee_writer)?;
            Ok(Some(guard))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings_from(pairs: &[(&str, &str)]) -> LogSettings {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        LogSettings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let settings = settings_from(&[]);
        assert_eq!(settings.level, "warn");
        assert_eq!(settings.format, LogFormat::Human);
        assert_eq!(settings.output, LogOutput::Console);
        assert!(settings.file_path.ends_with(DEFAULT_LOG_FILE));
    }

    #[test]
    fn test_explicit_values() {
        let settings = settings_from(&[
            ("LOG_LEVEL", "debug"),
            ("LOG_FORMAT", "json"),
            ("LOG_OUTPUT", "both"),
            ("LOG_FILE_PATH", "/var/log/pm/install.log"),
        ]);
        assert_eq!(settings.level, "debug");
        assert_eq!(settings.format, LogFormat::Json);
        assert_eq!(settings.output, LogOutput::Both);
        assert_eq!(settings.file_path, PathBuf::from("/var/log/pm/install.log"));
    }

    #[test]
    fn test_unknown_values_fall_back() {
        let settings = settings_from(&[("LOG_FORMAT", "xml"), ("LOG_OUTPUT", "syslog")]);
        assert_eq!(settings.format, LogFormat::Human);
        assert_eq!(settings.output, LogOutput::Console);
    }

    #[test]
    fn test_off_installs_nothing() {
        let settings = settings_from(&[("LOG_OUTPUT", "off")]);
        let guard = init_with_settings(&settings).unwrap();
        assert!(guard.is_none());
    }

    #[test]
    fn test_tee_writes_to_both() {
        let mut tee = Tee {
            a: Vec::new(),
            b: Vec::new(),
        };
        tee.write_all(b"line").unwrap();
        tee.flush().unwrap();
        assert_eq!(tee.a, b"line");
        assert_eq!(tee.b, b"line");
    }
}
