//! Configuration port interface

use std::path::PathBuf;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Persistent layer of the notifier settings
pub trait ConfigStore: Send + Sync {
    /// Stored settings; a store with nothing saved yields [`AppConfig::empty`]
    fn load(&self) -> Result<AppConfig, ConfigError>;

    fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    /// Location shown by `config path` and `config init`
    fn path(&self) -> PathBuf;

    /// Write [`AppConfig::defaults`], refusing to overwrite existing settings
    fn init(&self) -> Result<(), ConfigError>;
}
