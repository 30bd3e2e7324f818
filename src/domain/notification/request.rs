//! Notification request value object

/// A single notification to deliver
///
/// Transient: built per call and dropped once the command has run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationRequest {
    pub title: String,
    pub text: String,
    pub sound: bool,
    /// Per-call icon; `None` or an empty string falls back to the default icon
    pub icon: Option<String>,
}

impl NotificationRequest {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            sound: false,
            icon: None,
        }
    }

    /// Request a sound with the notification
    pub fn with_sound(mut self, sound: bool) -> Self {
        self.sound = sound;
        self
    }

    /// Override the default icon for this notification
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Pick the icon to use: the per-call one if non-empty, else `default`
    pub fn resolve_icon<'a>(&'a self, default: &'a str) -> &'a str {
        match self.icon.as_deref() {
            Some(icon) if !icon.is_empty() => icon,
            _ => default,
        }
    }
}
