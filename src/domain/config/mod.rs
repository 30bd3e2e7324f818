//! Configuration domain module

mod app_config;

pub use app_config::{AppConfig, DEFAULT_APP_NAME};

/// Construction-time options for the notifier, immutable afterwards
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotifierOptions {
    /// Icon used when a push does not name one
    pub default_icon: String,
    /// Name shown by backends that label notifications with the sender
    pub app_name: String,
}

impl NotifierOptions {
    pub fn new(default_icon: impl Into<String>, app_name: impl Into<String>) -> Self {
        Self {
            default_icon: default_icon.into(),
            app_name: app_name.into(),
        }
    }
}
