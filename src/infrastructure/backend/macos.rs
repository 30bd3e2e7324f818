//! macOS backend with tiered fallback
//!
//! Tier selection runs on every push, in this order:
//! 1. `terminal-notifier` when it is on `PATH`
//! 2. `osascript` (`display notification`) on 10.9 and later
//! 3. `growlnotify` otherwise

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::application::ports::{CapabilityProbe, NotificationBackend};
use crate::domain::notification::ExternalCommand;
use crate::domain::platform::NATIVE_NOTIFICATION_MIN_VERSION;

use super::windows::GROWLNOTIFY;

pub(crate) const TERMINAL_NOTIFIER: &str = "terminal-notifier";
const OSASCRIPT: &str = "osascript";

/// Seconds a critical terminal-notifier banner stays up
pub const CRITICAL_TIMEOUT_SECS: u32 = 30;

/// Notification mechanism picked for a single push
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacTier {
    TerminalNotifier,
    AppleScript,
    Growl,
}

impl MacTier {
    /// Pick the richest mechanism the probe reports as usable
    pub fn select(probe: &dyn CapabilityProbe) -> Self {
        if probe.has_external_notifier() {
            return Self::TerminalNotifier;
        }

        let min = NATIVE_NOTIFICATION_MIN_VERSION;
        if probe.os_version_at_least(min.major, min.minor) {
            return Self::AppleScript;
        }

        Self::Growl
    }
}

impl fmt::Display for MacTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MacTier::TerminalNotifier => write!(f, "terminal-notifier"),
            MacTier::AppleScript => write!(f, "osascript"),
            MacTier::Growl => write!(f, "growlnotify"),
        }
    }
}

/// Escape a value for use inside an AppleScript string literal
fn escape_applescript(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// macOS backend
pub struct MacOsBackend {
    /// Shown as the notification title; the push title becomes the subtitle
    app_name: String,
    probe: Arc<dyn CapabilityProbe>,
}

impl MacOsBackend {
    pub fn new(app_name: impl Into<String>, probe: Arc<dyn CapabilityProbe>) -> Self {
        Self {
            app_name: app_name.into(),
            probe,
        }
    }

    /// Probe the system and pick the tier for the next push
    pub fn current_tier(&self) -> MacTier {
        let tier = MacTier::select(&*self.probe);
        debug!(tier = %tier, "selected macOS notification tier");
        tier
    }

    fn terminal_notifier(
        &self,
        title: &str,
        text: &str,
        sound: bool,
        critical: bool,
    ) -> ExternalCommand {
        let timeout = CRITICAL_TIMEOUT_SECS.to_string();

        ExternalCommand::new(TERMINAL_NOTIFIER)
            .args([
                "-title",
                self.app_name.as_str(),
                "-message",
                text,
                "-subtitle",
                title,
            ])
            .args_if(critical, ["-timeout", timeout.as_str()])
            .args_if(sound, ["-sound", "default"])
    }

    fn applescript(&self, title: &str, text: &str, sound: bool) -> ExternalCommand {
        let mut script = format!(
            r#"display notification "{}" with title "{}" subtitle "{}""#,
            escape_applescript(text),
            escape_applescript(&self.app_name),
            escape_applescript(title)
        );
        if sound {
            script.push_str(r#" sound name "default""#);
        }

        ExternalCommand::new(OSASCRIPT).arg("-e").arg(script)
    }

    fn growl(&self, title: &str, text: &str, icon: &str) -> ExternalCommand {
        ExternalCommand::new(GROWLNOTIFY).args([
            "-n",
            self.app_name.as_str(),
            "--image",
            icon,
            "-t",
            title,
            "-m",
            text,
        ])
    }
}

impl NotificationBackend for MacOsBackend {
    fn name(&self) -> &'static str {
        "macos"
    }

    fn normal_push(&self, title: &str, text: &str, sound: bool, icon: &str) -> ExternalCommand {
        match self.current_tier() {
            MacTier::TerminalNotifier => self.terminal_notifier(title, text, sound, false),
            MacTier::AppleScript => self.applescript(title, text, sound),
            // growlnotify has no sound switch for regular pushes
            MacTier::Growl => self.growl(title, text, icon),
        }
    }

    fn critical_push(
        &self,
        title: &str,
        text: &str,
        sound: bool,
        icon: &str,
    ) -> ExternalCommand {
        match self.current_tier() {
            MacTier::TerminalNotifier => self.terminal_notifier(title, text, sound, true),
            // AppleScript banners cannot be made sticky; critical only drops the sound
            MacTier::AppleScript => self.applescript(title, text, false),
            MacTier::Growl => self
                .growl(title, text, icon)
                .arg("-s")
                .args_if(sound, ["-e", "default"]),
        }
    }
}
