//! Main app runner for sending a notification

use std::process::ExitCode;

use crate::application::ports::ConfigStore;
use crate::application::Notificator;
use crate::domain::config::AppConfig;
use crate::domain::notification::NotificationRequest;
use crate::infrastructure::XdgConfigStore;

use super::args::PushOptions;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Send (or with `dry_run`, print) a single notification
pub fn run_push(options: PushOptions, config: &AppConfig) -> ExitCode {
    let presenter = Presenter::new();

    let notifier_options = config.notifier_options();
    let notificator = match options.platform {
        Some(platform) => Notificator::for_platform(notifier_options, platform),
        None => Notificator::new(notifier_options),
    };

    let request = NotificationRequest::new(options.title, options.text)
        .with_sound(options.sound)
        .with_icon(options.icon);

    if options.dry_run {
        let command = match notificator.prepare(&request, options.urgency) {
            Ok(command) => command,
            Err(e) => {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
        };

        if let Err(e) = presenter.command(&command, options.json) {
            presenter.error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::from(EXIT_SUCCESS);
    }

    match notificator.send(&request, options.urgency) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Load and merge configuration from file and CLI.
///
/// Environment overrides arrive through clap and are part of `cli_config`.
pub fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    load_merged_config_from(&XdgConfigStore::new(), cli_config)
}

/// Merge: defaults < file < env/cli
pub fn load_merged_config_from<S: ConfigStore>(store: &S, cli_config: AppConfig) -> AppConfig {
    let file_config = store.load().unwrap_or_else(|e| {
        Presenter::new().warn(&format!("Ignoring config file: {}", e));
        AppConfig::empty()
    });

    AppConfig::defaults().merge(file_config).merge(cli_config)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::domain::notification::Urgency;

    #[test]
    fn merged_config_prefers_cli_over_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "app_name = \"FromFile\"\ndefault_icon = \"file.png\"\n").unwrap();
        let store = XdgConfigStore::with_path(&path);

        let cli = AppConfig {
            app_name: Some("FromCli".to_string()),
            ..Default::default()
        };
        let merged = load_merged_config_from(&store, cli);

        assert_eq!(merged.app_name_or_default(), "FromCli");
        assert_eq!(merged.default_icon_or_default(), "file.png");
        assert_eq!(merged.urgency_or_default(), Urgency::Normal);
    }

    #[test]
    fn explicit_silence_beats_file_sound() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "sound = true\n").unwrap();
        let store = XdgConfigStore::with_path(&path);

        assert!(load_merged_config_from(&store, AppConfig::empty()).sound_or_default());

        let cli = AppConfig {
            sound: Some(false),
            ..Default::default()
        };
        assert!(!load_merged_config_from(&store, cli).sound_or_default());
    }

    #[test]
    fn merged_config_ignores_broken_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "this is not toml = = =").unwrap();
        let store = XdgConfigStore::with_path(&path);

        let merged = load_merged_config_from(&store, AppConfig::empty());
        assert_eq!(merged, AppConfig::defaults());
    }
}
