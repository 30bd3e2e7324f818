//! Platform domain module

mod os_version;

use std::fmt;

pub use os_version::{version_output_at_least, OsVersion, NATIVE_NOTIFICATION_MIN_VERSION};

/// OS family a notification backend is bound to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Platform {
    MacOs,
    Linux,
    Windows,
    /// Any other OS family; carries the detected name
    Unsupported(String),
}

impl Platform {
    /// Platform of the running binary
    pub fn current() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Map an OS family name to a platform
    pub fn from_os_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "macos" | "darwin" => Self::MacOs,
            "linux" => Self::Linux,
            "windows" => Self::Windows,
            other => Self::Unsupported(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::MacOs => "macos",
            Self::Linux => "linux",
            Self::Windows => "windows",
            Self::Unsupported(name) => name,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported(_))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
