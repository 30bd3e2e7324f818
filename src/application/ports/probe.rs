//! Capability probe port interface

/// Port for runtime checks of the notification tooling on the host.
///
/// Probes answer with a plain boolean. Failing to run a check is reported
/// as the capability being absent, never as an error. Implementations must
/// not cache: every call looks at the system again.
pub trait CapabilityProbe: Send + Sync {
    /// Whether the richer notifier binary (`terminal-notifier`) is on `PATH`
    fn has_external_notifier(&self) -> bool;

    /// Whether the OS product version is at least `major.minor`
    fn os_version_at_least(&self, major: u32, minor: u32) -> bool;
}
