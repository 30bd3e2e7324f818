//! Domain layer - Core notification model
//!
//! Contains value objects and domain errors.
//! This layer never spawns processes or touches the filesystem.

pub mod config;
pub mod error;
pub mod notification;
pub mod platform;

// Re-export common types
pub use config::{AppConfig, NotifierOptions};
pub use error::*;
pub use notification::{ExternalCommand, NotificationRequest, Urgency};
pub use platform::{OsVersion, Platform};
