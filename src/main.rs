//! Notificator CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use notificator::cli::{
    app::{load_merged_config, run_push, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands, PushOptions},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use notificator::domain::config::AppConfig;
use notificator::domain::notification::Urgency;
use notificator::infrastructure::XdgConfigStore;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("notificator=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Handle subcommands
    if let Some(Commands::Config { action }) = cli.command {
        let store = XdgConfigStore::new();
        if let Err(e) = handle_config_command(action, &store, &presenter) {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    let sound = cli.sound_override();
    let (title, text) = match (cli.title, cli.text) {
        (Some(title), Some(text)) => (title, text),
        _ => {
            presenter.error("Both TITLE and TEXT are required. See 'notificator --help'.");
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    // Build CLI config from args
    let cli_config = AppConfig {
        sound,
        default_icon: cli.default_icon,
        app_name: cli.app_name,
        urgency: cli.urgency.map(|u| Urgency::from(u).to_string()),
    };

    let config = load_merged_config(cli_config);

    let options = PushOptions {
        title,
        text,
        sound: config.sound_or_default(),
        icon: cli.icon.unwrap_or_default(),
        urgency: config.urgency_or_default(),
        platform: cli.platform.map(Into::into),
        dry_run: cli.dry_run,
        json: cli.json,
    };

    run_push(options, &config)
}
