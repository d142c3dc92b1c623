use serde::{Deserialize, Serialize};
use std::fmt;

/// Operating system family of the running host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostOs {
    Windows,
    Macos,
    Linux,
    Unknown,
}

impl HostOs {
    /// Maps a `std::env::consts::OS` value to a host family.
    pub fn from_os_name(name: &str) -> Self {
        match name {
            "windows" => HostOs::Windows,
            "macos" => HostOs::Macos,
            "linux" => HostOs::Linux,
            _ => HostOs::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HostOs::Windows => "windows",
            HostOs::Macos => "macos",
            HostOs::Linux => "linux",
            HostOs::Unknown => "unknown",
        }
    }
}

impl fmt::Display for HostOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostInfo {
    pub os: HostOs,
    pub arch: String,
}

impl HostInfo {
    pub fn new(os: HostOs, arch: impl Into<String>) -> Self {
        Self {
            os,
            arch: arch.into(),
        }
    }

    /// macOS on an ARM processor.
    pub fn is_apple_silicon(&self) -> bool {
        self.os == HostOs::Macos && matches!(self.arch.as_str(), "aarch64" | "arm64")
    }
}

/// Detects the host operating system and processor architecture.
pub fn detect_host() -> HostInfo {
    HostInfo::new(
        HostOs::from_os_name(std::env::consts::OS),
        std::env::consts::ARCH,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_host() {
        let host = detect_host();
        assert!(!host.arch.is_empty());
        if cfg!(target_os = "linux") {
            assert_eq!(host.os, HostOs::Linux);
        }
    }

    #[test]
    fn test_from_os_name() {
        assert_eq!(HostOs::from_os_name("macos"), HostOs::Macos);
        assert_eq!(HostOs::from_os_name("windows"), HostOs::Windows);
        assert_eq!(HostOs::from_os_name("linux"), HostOs::Linux);
        assert_eq!(HostOs::from_os_name("freebsd"), HostOs::Unknown);
    }

    #[test]
    fn test_apple_silicon_requires_macos_and_arm() {
        assert!(HostInfo::new(HostOs::Macos, "aarch64").is_apple_silicon());
        assert!(HostInfo::new(HostOs::Macos, "arm64").is_apple_silicon());
        assert!(!HostInfo::new(HostOs::Macos, "x86_64").is_apple_silicon());
        assert!(!HostInfo::new(HostOs::Linux, "aarch64").is_apple_silicon());
    }
}
