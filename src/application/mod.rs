//! Application layer - Facade and port interfaces
//!
//! Contains the notification facade and trait definitions
//! for external system interactions.

pub mod notificator;
pub mod ports;

// Re-export the facade
pub use notificator::Notificator;
