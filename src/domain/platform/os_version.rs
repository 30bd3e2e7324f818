//! OS version value object

use std::fmt;

/// First macOS release whose `display notification` is usable from AppleScript
pub const NATIVE_NOTIFICATION_MIN_VERSION: OsVersion = OsVersion {
    major: 10,
    minor: 9,
};

/// Major/minor pair of an OS product version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OsVersion {
    pub major: u32,
    pub minor: u32,
}

impl OsVersion {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Parse a dotted version string such as `"10.9.2"`.
    ///
    /// Only the first two components are read. A lone major (`"11"`) is
    /// read as `11.0`. Returns `None` if either component is not numeric.
    pub fn parse(input: &str) -> Option<Self> {
        let mut parts = input.trim().split('.');

        let major = parts.next()?.trim().parse().ok()?;
        let minor = match parts.next() {
            Some(minor) => minor.trim().parse().ok()?,
            None => 0,
        };

        Some(Self { major, minor })
    }

    /// True iff `(self.major, self.minor) >= (major, minor)`
    pub fn at_least(&self, major: u32, minor: u32) -> bool {
        *self >= Self::new(major, minor)
    }
}

impl fmt::Display for OsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Check raw version output against a threshold; unparsable output is `false`
pub fn version_output_at_least(output: &str, major: u32, minor: u32) -> bool {
    OsVersion::parse(output)
        .map(|v| v.at_least(major, minor))
        .unwrap_or(false)
}
