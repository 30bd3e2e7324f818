//! Notification facade
//!
//! Callers interact with [`Notificator`] only. It owns the backend bound at
//! construction, resolves the icon and urgency of each push, and runs the
//! resulting command synchronously on the calling thread.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::error::NotifyError;
use crate::domain::notification::{ExternalCommand, NotificationRequest, Urgency};
use crate::domain::platform::Platform;

use super::ports::{CommandRunner, NotificationBackend};

/// Cross-platform notification dispatcher
pub struct Notificator {
    platform: Platform,
    backend: Option<Box<dyn NotificationBackend>>,
    default_icon: String,
    runner: Arc<dyn CommandRunner>,
}

impl Notificator {
    /// Assemble a notificator from already-selected parts.
    ///
    /// `backend` is `None` when the platform has no notification backend;
    /// every push then fails with [`NotifyError::UnsupportedPlatform`].
    pub fn from_parts(
        platform: Platform,
        backend: Option<Box<dyn NotificationBackend>>,
        default_icon: impl Into<String>,
        runner: Arc<dyn CommandRunner>,
    ) -> Self {
        Self {
            platform,
            backend,
            default_icon: default_icon.into(),
            runner,
        }
    }

    /// Show a notification.
    ///
    /// An empty `icon_path` falls back to the configured default icon.
    /// Critical urgency selects the backend's persistent variant.
    pub fn push(
        &self,
        title: &str,
        text: &str,
        sound: bool,
        icon_path: &str,
        urgency: Urgency,
    ) -> Result<(), NotifyError> {
        let request = NotificationRequest::new(title, text)
            .with_sound(sound)
            .with_icon(icon_path);
        self.send(&request, urgency)
    }

    /// Show a notification described by `request`
    pub fn send(
        &self,
        request: &NotificationRequest,
        urgency: Urgency,
    ) -> Result<(), NotifyError> {
        let command = self.prepare(request, urgency)?;

        debug!(command = %command, urgency = %urgency, "running notification command");
        self.runner
            .run(&command)
            .inspect_err(|e| warn!(error = %e, "notification command failed"))
    }

    /// Build the command `send` would run, without running it
    pub fn prepare(
        &self,
        request: &NotificationRequest,
        urgency: Urgency,
    ) -> Result<ExternalCommand, NotifyError> {
        let backend = self
            .backend
            .as_ref()
            .ok_or_else(|| NotifyError::UnsupportedPlatform(self.platform.to_string()))?;

        let icon = request.resolve_icon(&self.default_icon);

        let command = match urgency {
            Urgency::Critical => {
                backend.critical_push(&request.title, &request.text, request.sound, icon)
            }
            Urgency::Normal => {
                backend.normal_push(&request.title, &request.text, request.sound, icon)
            }
        };

        Ok(command)
    }

    /// Platform this notificator was bound to
    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// Name of the bound backend, if any
    pub fn backend_name(&self) -> Option<&'static str> {
        self.backend.as_ref().map(|b| b.name())
    }

    pub fn is_supported(&self) -> bool {
        self.backend.is_some()
    }

    pub fn default_icon(&self) -> &str {
        &self.default_icon
    }
}

impl fmt::Debug for Notificator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notificator")
            .field("platform", &self.platform)
            .field("backend", &self.backend_name())
            .field("default_icon", &self.default_icon)
            .finish()
    }
}
