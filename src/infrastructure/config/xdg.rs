//! TOML settings file under the user's config directory

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

const CONFIG_DIR: &str = "notificator";
const CONFIG_FILE: &str = "config.toml";

/// Settings stored at `$XDG_CONFIG_HOME/notificator/config.toml`
/// (or the platform equivalent reported by `dirs`)
pub struct XdgConfigStore {
    path: PathBuf,
}

impl XdgConfigStore {
    pub fn new() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("~/.config"));
        Self::with_path(base.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Store backed by an explicit file
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn decode(content: &str) -> Result<AppConfig, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    fn encode(config: &AppConfig) -> Result<String, ConfigError> {
        toml::to_string_pretty(config).map_err(|e| ConfigError::WriteError(e.to_string()))
    }
}

impl Default for XdgConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for XdgConfigStore {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Self::decode(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no config file");
                Ok(AppConfig::empty())
            }
            Err(e) => Err(ConfigError::ReadError(e.to_string())),
        }
    }

    fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        let content = Self::encode(config)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError(e.to_string()))?;
        }
        fs::write(&self.path, content).map_err(|e| ConfigError::WriteError(e.to_string()))?;

        debug!(path = %self.path.display(), "saved config file");
        Ok(())
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn init(&self) -> Result<(), ConfigError> {
        if self.path.exists() {
            return Err(ConfigError::AlreadyExists(
                self.path.display().to_string(),
            ));
        }

        self.save(&AppConfig::defaults())
    }
}
