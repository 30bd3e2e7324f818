//! notify-send backend for Linux desktops

use crate::application::ports::NotificationBackend;
use crate::domain::notification::ExternalCommand;

pub(crate) const NOTIFY_SEND: &str = "notify-send";

/// Freedesktop hint selecting the "new message" sound theme entry
pub(crate) const SOUND_HINT: [&str; 2] = ["-h", "string:sound-name:message-new-instant"];

/// Ends option parsing so titles like `-5 degrees` stay positional
pub(crate) const END_OF_OPTIONS: &str = "--";

/// notify-send backend
///
/// Uses the freedesktop `notify-send` tool, always available on
/// desktops with a notification daemon.
pub struct LinuxBackend;

impl LinuxBackend {
    /// Create a new notify-send backend
    pub fn new() -> Self {
        Self
    }
}

impl Default for LinuxBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationBackend for LinuxBackend {
    fn name(&self) -> &'static str {
        "linux"
    }

    fn normal_push(&self, title: &str, text: &str, sound: bool, icon: &str) -> ExternalCommand {
        ExternalCommand::new(NOTIFY_SEND)
            .args(["-i", icon])
            .args_if(sound, SOUND_HINT)
            .args([END_OF_OPTIONS, title, text])
    }

    fn critical_push(
        &self,
        title: &str,
        text: &str,
        sound: bool,
        icon: &str,
    ) -> ExternalCommand {
        ExternalCommand::new(NOTIFY_SEND)
            .args(["-i", icon, "-u", "critical"])
            .args_if(sound, SOUND_HINT)
            .args([END_OF_OPTIONS, title, text])
    }
}
