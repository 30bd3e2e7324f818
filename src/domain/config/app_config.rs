//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::notification::Urgency;

use super::NotifierOptions;

/// Default application name shown by backends that take one
pub const DEFAULT_APP_NAME: &str = "Notificator";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub default_icon: Option<String>,
    pub app_name: Option<String>,
    pub sound: Option<bool>,
    pub urgency: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            default_icon: Some(String::new()),
            app_name: Some(DEFAULT_APP_NAME.to_string()),
            sound: Some(false),
            urgency: Some(Urgency::Normal.to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            default_icon: other.default_icon.or(self.default_icon),
            app_name: other.app_name.or(self.app_name),
            sound: other.sound.or(self.sound),
            urgency: other.urgency.or(self.urgency),
        }
    }

    /// Get the default icon, or an empty path if not set
    pub fn default_icon_or_default(&self) -> &str {
        self.default_icon.as_deref().unwrap_or("")
    }

    /// Get the app name, or [`DEFAULT_APP_NAME`] if not set
    pub fn app_name_or_default(&self) -> &str {
        self.app_name.as_deref().unwrap_or(DEFAULT_APP_NAME)
    }

    /// Get sound setting, or false if not set
    pub fn sound_or_default(&self) -> bool {
        self.sound.unwrap_or(false)
    }

    /// Get urgency as parsed Urgency, or default if not set/invalid
    pub fn urgency_or_default(&self) -> Urgency {
        self.urgency
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Construction options for the notifier facade
    pub fn notifier_options(&self) -> NotifierOptions {
        NotifierOptions::new(self.default_icon_or_default(), self.app_name_or_default())
    }
}
