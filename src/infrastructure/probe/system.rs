//! Capability probe backed by system utilities

use std::process::{Command, Stdio};

use tracing::debug;

use crate::application::ports::CapabilityProbe;
use crate::domain::platform::version_output_at_least;

use crate::infrastructure::backend::TERMINAL_NOTIFIER;

const WHICH: &str = "which";

/// Probe that shells out to `which` and `sw_vers`.
///
/// Nothing is cached, so tools installed between pushes are picked up.
pub struct SystemProbe {
    notifier: String,
    locator: String,
}

impl SystemProbe {
    /// Create a probe looking for `terminal-notifier`
    pub fn new() -> Self {
        Self::with_notifier(TERMINAL_NOTIFIER)
    }

    /// Create a probe looking for a differently named notifier binary
    pub fn with_notifier(notifier: impl Into<String>) -> Self {
        Self {
            notifier: notifier.into(),
            locator: WHICH.to_string(),
        }
    }

    /// Use `locator` instead of `which` to look up the notifier
    pub fn with_locator(mut self, locator: impl Into<String>) -> Self {
        self.locator = locator.into();
        self
    }
}

impl Default for SystemProbe {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if a tool binary is available by asking `locator` for it.
///
/// A locator that cannot be started counts as "not available".
fn is_tool_available(locator: &str, tool: &str) -> bool {
    match Command::new(locator)
        .arg(tool)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
    {
        Ok(status) => status.success(),
        Err(e) => {
            debug!(locator, tool, error = %e, "could not run tool locator");
            false
        }
    }
}

/// Read the macOS product version, e.g. `"14.4.1\n"`
fn product_version() -> Option<String> {
    let output = Command::new("sw_vers")
        .arg("-productVersion")
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .map_err(|e| debug!(error = %e, "could not run sw_vers"))
        .ok()?;

    if !output.status.success() {
        debug!(status = %output.status, "sw_vers failed");
        return None;
    }

    Some(String::from_utf8_lossy(&output.stdout).into_owned())
}

impl CapabilityProbe for SystemProbe {
    fn has_external_notifier(&self) -> bool {
        is_tool_available(&self.locator, &self.notifier)
    }

    fn os_version_at_least(&self, major: u32, minor: u32) -> bool {
        product_version()
            .map(|v| version_output_at_least(&v, major, minor))
            .unwrap_or(false)
    }
}
