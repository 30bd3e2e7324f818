//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting,
//! and the push/config runners.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;

// Re-export commonly used types
pub use app::{load_merged_config, run_push, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, PushOptions};
pub use config_cmd::handle_config_command;
pub use presenter::Presenter;
