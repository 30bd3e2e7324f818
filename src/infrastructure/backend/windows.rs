//! Growl for Windows backend

use crate::application::ports::NotificationBackend;
use crate::domain::notification::ExternalCommand;

use super::linux::{END_OF_OPTIONS, NOTIFY_SEND, SOUND_HINT};

pub(crate) const GROWLNOTIFY: &str = "growlnotify";

/// Windows backend
///
/// Normal pushes go through `growlnotify.exe`. Critical pushes are handed
/// to `notify-send` with Growl's sticky (`/s true`) and priority (`/p 2`)
/// switches appended. That program is not normally present on Windows, so
/// critical pushes fail there unless a compatible shim is installed; the
/// shape is kept as-is for callers relying on it.
pub struct WindowsBackend;

impl WindowsBackend {
    /// Create a new Windows backend
    pub fn new() -> Self {
        Self
    }
}

impl Default for WindowsBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationBackend for WindowsBackend {
    fn name(&self) -> &'static str {
        "windows"
    }

    fn normal_push(&self, title: &str, text: &str, sound: bool, icon: &str) -> ExternalCommand {
        ExternalCommand::new(GROWLNOTIFY)
            .arg(format!("/i:{}", icon))
            .arg(format!("/t:{}", title))
            .arg(text)
            .args_if(sound, ["/silent:false"])
    }

    fn critical_push(
        &self,
        title: &str,
        text: &str,
        sound: bool,
        icon: &str,
    ) -> ExternalCommand {
        ExternalCommand::new(NOTIFY_SEND)
            .args(["-i", icon])
            .args_if(sound, SOUND_HINT)
            .args([END_OF_OPTIONS, title, text, "/s", "true", "/p", "2"])
    }
}
