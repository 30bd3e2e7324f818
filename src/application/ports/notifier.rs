//! Notification backend port interface

use crate::domain::notification::ExternalCommand;

/// Port for a platform notification backend.
///
/// A backend turns a notification into the external command that shows it.
/// It never runs the command itself.
pub trait NotificationBackend: Send + Sync {
    /// Short identifier used in logs and CLI output
    fn name(&self) -> &'static str;

    /// Build the command for a regular, auto-dismissing notification.
    ///
    /// # Arguments
    /// * `title` - The notification title
    /// * `text` - The notification body
    /// * `sound` - Whether a sound was requested
    /// * `icon` - The already-resolved icon path
    fn normal_push(&self, title: &str, text: &str, sound: bool, icon: &str) -> ExternalCommand;

    /// Build the command for a notification meant to stay until dismissed.
    fn critical_push(&self, title: &str, text: &str, sound: bool, icon: &str)
        -> ExternalCommand;
}

/// Blanket implementation for boxed backend types
impl NotificationBackend for Box<dyn NotificationBackend> {
    fn name(&self) -> &'static str {
        self.as_ref().name()
    }

    fn normal_push(&self, title: &str, text: &str, sound: bool, icon: &str) -> ExternalCommand {
        self.as_ref().normal_push(title, text, sound, icon)
    }

    fn critical_push(
        &self,
        title: &str,
        text: &str,
        sound: bool,
        icon: &str,
    ) -> ExternalCommand {
        self.as_ref().critical_push(title, text, sound, icon)
    }
}
