//! CLI argument definitions using Clap

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::notification::Urgency;
use crate::domain::platform::Platform;

/// Notificator - desktop notifications from the command line
#[derive(Parser, Debug)]
#[command(name = "notificator")]
#[command(version)]
#[command(about = "Send a desktop notification through the platform's notifier tool")]
#[command(long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Notification title
    #[arg(value_name = "TITLE")]
    pub title: Option<String>,

    /// Notification body
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Play a sound with the notification
    #[arg(short = 's', long, overrides_with = "no_sound")]
    pub sound: bool,

    /// Stay silent even if the config file enables sound
    #[arg(long, overrides_with = "sound")]
    pub no_sound: bool,

    /// Icon for this notification (overrides the default icon)
    #[arg(short = 'i', long, value_name = "PATH")]
    pub icon: Option<String>,

    /// Notification urgency
    #[arg(short = 'u', long, value_name = "URGENCY")]
    pub urgency: Option<UrgencyArg>,

    /// Icon used when --icon is not given
    #[arg(long, value_name = "PATH", env = "NOTIFICATOR_ICON")]
    pub default_icon: Option<String>,

    /// Application name shown by notifiers that support one
    #[arg(long, value_name = "NAME", env = "NOTIFICATOR_APP_NAME")]
    pub app_name: Option<String>,

    /// Target platform instead of the detected one
    #[arg(long, value_name = "PLATFORM")]
    pub platform: Option<PlatformArg>,

    /// Print the notifier command instead of running it
    #[arg(long)]
    pub dry_run: bool,

    /// With --dry-run, print the command as JSON
    #[arg(long, requires = "dry_run")]
    pub json: bool,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Sound choice made on the command line, if any
    pub fn sound_override(&self) -> Option<bool> {
        match (self.sound, self.no_sound) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Urgency argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum UrgencyArg {
    Normal,
    Critical,
}

impl From<UrgencyArg> for Urgency {
    fn from(arg: UrgencyArg) -> Self {
        match arg {
            UrgencyArg::Normal => Urgency::Normal,
            UrgencyArg::Critical => Urgency::Critical,
        }
    }
}

/// Platform argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PlatformArg {
    Macos,
    Linux,
    Windows,
    Unsupported,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Macos => Platform::MacOs,
            PlatformArg::Linux => Platform::Linux,
            PlatformArg::Windows => Platform::Windows,
            PlatformArg::Unsupported => Platform::Unsupported("unsupported".to_string()),
        }
    }
}

/// Parsed push options
#[derive(Debug, Clone)]
pub struct PushOptions {
    pub title: String,
    pub text: String,
    pub sound: bool,
    pub icon: String,
    pub urgency: Urgency,
    pub platform: Option<Platform>,
    pub dry_run: bool,
    pub json: bool,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["default_icon", "app_name", "sound", "urgency"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::parse_from(["notificator", "Title", "Body"]);
        assert_eq!(cli.title, Some("Title".to_string()));
        assert_eq!(cli.text, Some("Body".to_string()));
        assert!(!cli.sound);
        assert!(cli.icon.is_none());
        assert!(cli.urgency.is_none());
        assert!(cli.platform.is_none());
        assert!(!cli.dry_run);
        assert!(cli.command.is_none());
    }

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::parse_from([
            "notificator",
            "-s",
            "-i",
            "custom.png",
            "-u",
            "critical",
            "T",
            "body",
        ]);
        assert!(cli.sound);
        assert_eq!(cli.icon, Some("custom.png".to_string()));
        assert_eq!(cli.urgency, Some(UrgencyArg::Critical));
    }

    #[test]
    fn sound_flags_last_one_wins() {
        let cli = Cli::parse_from(["notificator", "T", "body"]);
        assert_eq!(cli.sound_override(), None);

        let cli = Cli::parse_from(["notificator", "--no-sound", "T", "body"]);
        assert_eq!(cli.sound_override(), Some(false));

        let cli = Cli::parse_from(["notificator", "--no-sound", "-s", "T", "body"]);
        assert_eq!(cli.sound_override(), Some(true));

        let cli = Cli::parse_from(["notificator", "-s", "--no-sound", "T", "body"]);
        assert_eq!(cli.sound_override(), Some(false));
    }

    #[test]
    fn cli_parses_dry_run_json_platform() {
        let cli = Cli::parse_from([
            "notificator",
            "--dry-run",
            "--json",
            "--platform",
            "windows",
            "T",
            "body",
        ]);
        assert!(cli.dry_run);
        assert!(cli.json);
        assert_eq!(cli.platform, Some(PlatformArg::Windows));
    }

    #[test]
    fn cli_json_requires_dry_run() {
        let result = Cli::try_parse_from(["notificator", "--json", "T", "body"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parses_config_init() {
        let cli = Cli::parse_from(["notificator", "config", "init"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                action: ConfigAction::Init
            })
        ));
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["notificator", "config", "set", "app_name", "Builder"]);
        if let Some(Commands::Config {
            action: ConfigAction::Set { key, value },
        }) = cli.command
        {
            assert_eq!(key, "app_name");
            assert_eq!(value, "Builder");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn urgency_arg_converts() {
        assert_eq!(Urgency::from(UrgencyArg::Normal), Urgency::Normal);
        assert_eq!(Urgency::from(UrgencyArg::Critical), Urgency::Critical);
    }

    #[test]
    fn platform_arg_converts() {
        assert_eq!(Platform::from(PlatformArg::Macos), Platform::MacOs);
        assert!(!Platform::from(PlatformArg::Unsupported).is_supported());
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("default_icon"));
        assert!(is_valid_config_key("urgency"));
        assert!(!is_valid_config_key("api_key"));
    }

    #[test]
    fn verify_cli() {
        // Verify the CLI definition is valid
        Cli::command().debug_assert();
    }
}
