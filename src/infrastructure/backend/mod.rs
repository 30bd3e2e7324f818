//! Notification backend infrastructure module
//!
//! One backend per OS family, each turning a notification into the
//! command line of the platform's notifier tool.

mod factory;
mod linux;
mod macos;
mod windows;

pub use factory::create_backend;
pub use linux::LinuxBackend;
pub use macos::{MacOsBackend, MacTier, CRITICAL_TIMEOUT_SECS};
pub use windows::WindowsBackend;

pub(crate) use macos::TERMINAL_NOTIFIER;
