//! Command runner port interface

use crate::domain::error::NotifyError;
use crate::domain::notification::ExternalCommand;

/// Port for running an external command to completion
pub trait CommandRunner: Send + Sync {
    /// Run `command` synchronously.
    ///
    /// # Returns
    /// Ok(()) if the process started and exited successfully,
    /// `NotifyError::Execution` otherwise
    fn run(&self, command: &ExternalCommand) -> Result<(), NotifyError>;
}
