//! Notificator - uniform desktop notifications
//!
//! One `push` call that works on macOS, Linux, and Windows by building the
//! command line of whatever notifier tool the platform offers and running it.
//!
//! ```no_run
//! use notificator::{Notificator, NotifierOptions, Urgency};
//!
//! let notificator = Notificator::new(NotifierOptions::new("icon/default.png", "My App"));
//! notificator.push("Build finished", "All tests passed", true, "", Urgency::Normal)?;
//! # Ok::<(), notificator::NotifyError>(())
//! ```
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects (urgency, platform, OS version, commands) and errors
//! - **Application**: The `Notificator` facade and port interfaces (traits)
//! - **Infrastructure**: Platform backends, capability probe, process runner, config store
//! - **CLI**: Command-line driver, argument parsing, and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

pub use application::Notificator;
pub use domain::{
    ExternalCommand, NotificationRequest, NotifierOptions, NotifyError, Platform, Urgency,
};
