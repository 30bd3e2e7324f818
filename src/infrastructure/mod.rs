//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with notify-send, terminal-notifier, osascript, growlnotify,
//! and the XDG config directory.

pub mod backend;
pub mod config;
pub mod probe;
pub mod runner;

// Re-export adapters
pub use backend::{create_backend, LinuxBackend, MacOsBackend, MacTier, WindowsBackend};
pub use config::XdgConfigStore;
pub use probe::SystemProbe;
pub use runner::ProcessRunner;
