//! Backend factory bound to the platform at construction

use std::sync::Arc;

use tracing::debug;

use crate::application::ports::{CapabilityProbe, CommandRunner, NotificationBackend};
use crate::application::Notificator;
use crate::domain::config::NotifierOptions;
use crate::domain::platform::Platform;
use crate::infrastructure::probe::SystemProbe;
use crate::infrastructure::runner::ProcessRunner;

use super::linux::LinuxBackend;
use super::macos::MacOsBackend;
use super::windows::WindowsBackend;

/// Create the backend for `platform`.
///
/// Returns `None` for platforms without a notification backend.
/// The probe is only consulted by the macOS backend, on each push.
pub fn create_backend(
    platform: &Platform,
    options: &NotifierOptions,
    probe: Arc<dyn CapabilityProbe>,
) -> Option<Box<dyn NotificationBackend>> {
    match platform {
        Platform::MacOs => Some(Box::new(MacOsBackend::new(options.app_name.clone(), probe))),
        Platform::Linux => Some(Box::new(LinuxBackend::new())),
        Platform::Windows => Some(Box::new(WindowsBackend::new())),
        Platform::Unsupported(_) => None,
    }
}

impl Notificator {
    /// Create a notificator for the running OS family.
    ///
    /// The platform is inspected once here and never again.
    pub fn new(options: NotifierOptions) -> Self {
        Self::for_platform(options, Platform::current())
    }

    /// Create a notificator bound to an explicit platform
    pub fn for_platform(options: NotifierOptions, platform: Platform) -> Self {
        Self::with_adapters(
            options,
            platform,
            Arc::new(SystemProbe::new()),
            Arc::new(ProcessRunner::new()),
        )
    }

    /// Create a notificator with caller-supplied probe and runner
    pub fn with_adapters(
        options: NotifierOptions,
        platform: Platform,
        probe: Arc<dyn CapabilityProbe>,
        runner: Arc<dyn CommandRunner>,
    ) -> Self {
        let backend = create_backend(&platform, &options, probe);

        match backend.as_ref() {
            Some(b) => {
                debug!(platform = %platform, backend = b.name(), "bound notification backend")
            }
            None => debug!(platform = %platform, "no notification backend for platform"),
        }

        Notificator::from_parts(platform, backend, options.default_icon, runner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoProbe;

    impl CapabilityProbe for NoProbe {
        fn has_external_notifier(&self) -> bool {
            false
        }

        fn os_version_at_least(&self, _major: u32, _minor: u32) -> bool {
            false
        }
    }

    fn options() -> NotifierOptions {
        NotifierOptions::new("default.png", "App")
    }

    #[test]
    fn create_backend_per_platform() {
        let probe: Arc<dyn CapabilityProbe> = Arc::new(NoProbe);
        let name = |p: Platform| create_backend(&p, &options(), probe.clone()).map(|b| b.name());

        assert_eq!(name(Platform::MacOs), Some("macos"));
        assert_eq!(name(Platform::Linux), Some("linux"));
        assert_eq!(name(Platform::Windows), Some("windows"));
        assert_eq!(name(Platform::Unsupported("haiku".to_string())), None);
    }

    #[test]
    fn for_platform_binds_backend() {
        let notificator = Notificator::for_platform(options(), Platform::Linux);
        assert_eq!(notificator.platform(), &Platform::Linux);
        assert_eq!(notificator.backend_name(), Some("linux"));
        assert_eq!(notificator.default_icon(), "default.png");
    }

    #[test]
    fn for_unsupported_platform_has_no_backend() {
        let notificator =
            Notificator::for_platform(options(), Platform::Unsupported("haiku".to_string()));
        assert!(!notificator.is_supported());
    }

    #[test]
    fn new_uses_current_platform() {
        let notificator = Notificator::new(options());
        assert_eq!(notificator.platform(), &Platform::current());
    }
}
