//! External command value object

use std::fmt;
use std::process::Command;

use serde::Serialize;

/// A fully specified external-process invocation
///
/// Backends only describe the invocation; running it is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ExternalCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append a single argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments in order
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Append arguments only when `condition` holds
    pub fn args_if<I, S>(self, condition: bool, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if condition {
            self.args(args)
        } else {
            self
        }
    }

    /// Check whether two consecutive arguments appear as `flag value`
    pub fn has_pair(&self, flag: &str, value: &str) -> bool {
        self.args
            .windows(2)
            .any(|pair| pair[0] == flag && pair[1] == value)
    }

    pub fn has_arg(&self, arg: &str) -> bool {
        self.args.iter().any(|a| a == arg)
    }

    /// Build a `std::process::Command` ready to spawn
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }
}

fn quote(arg: &str) -> String {
    let needs_quotes = arg.is_empty()
        || arg
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '\\' | '$' | '`'));

    if needs_quotes {
        format!("'{}'", arg.replace('\'', r"'\''"))
    } else {
        arg.to_string()
    }
}

impl fmt::Display for ExternalCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", quote(arg))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_argument_order() {
        let cmd = ExternalCommand::new("notify-send")
            .args(["-i", "icon.png"])
            .arg("Title")
            .args_if(false, ["-u", "critical"])
            .args_if(true, ["-t", "5000"]);

        assert_eq!(cmd.program, "notify-send");
        assert_eq!(cmd.args, vec!["-i", "icon.png", "Title", "-t", "5000"]);
    }

    #[test]
    fn has_pair_matches_adjacent_arguments_only() {
        let cmd = ExternalCommand::new("x").args(["-u", "critical", "-i", "a"]);
        assert!(cmd.has_pair("-u", "critical"));
        assert!(!cmd.has_pair("-u", "a"));
    }

    #[test]
    fn display_quotes_arguments_with_spaces() {
        let cmd = ExternalCommand::new("osascript")
            .arg("-e")
            .arg("display notification \"hi\"");
        assert_eq!(
            cmd.to_string(),
            r#"osascript -e 'display notification "hi"'"#
        );
    }

    #[test]
    fn display_quotes_empty_and_single_quote() {
        let cmd = ExternalCommand::new("echo").arg("").arg("it's");
        assert_eq!(cmd.to_string(), r"echo '' 'it'\''s'");
    }

    #[test]
    fn to_command_carries_program_and_args() {
        let cmd = ExternalCommand::new("which").arg("terminal-notifier");
        let command = cmd.to_command();
        assert_eq!(command.get_program(), "which");
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(args, vec!["terminal-notifier"]);
    }
}
