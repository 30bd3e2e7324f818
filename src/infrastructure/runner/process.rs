//! Synchronous process runner

use crate::application::ports::CommandRunner;
use crate::domain::error::NotifyError;
use crate::domain::notification::ExternalCommand;

/// Runs commands with `std::process`, blocking until they exit.
///
/// Standard streams are inherited from the caller.
pub struct ProcessRunner;

impl ProcessRunner {
    /// Create a new process runner
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, command: &ExternalCommand) -> Result<(), NotifyError> {
        let status = command
            .to_command()
            .status()
            .map_err(|e| NotifyError::execution(&command.program, e.to_string()))?;

        if !status.success() {
            return Err(NotifyError::execution(
                &command.program,
                format!("exited with status: {}", status),
            ));
        }

        Ok(())
    }
}
