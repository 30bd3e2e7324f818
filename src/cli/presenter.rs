//! CLI presenter for output formatting

use colored::*;

use crate::domain::notification::ExternalCommand;

/// Presenter for CLI output formatting
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Output a command line to stdout, as text or JSON
    pub fn command(&self, command: &ExternalCommand, json: bool) -> Result<(), String> {
        let rendered = Self::format_command(command, json)?;
        self.output(&rendered);
        Ok(())
    }

    /// Render a command line for display
    pub fn format_command(command: &ExternalCommand, json: bool) -> Result<String, String> {
        if json {
            serde_json::to_string(command).map_err(|e| format!("Failed to encode command: {}", e))
        } else {
            Ok(command.to_string())
        }
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}
