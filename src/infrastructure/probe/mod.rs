//! Capability probe infrastructure module

mod system;

pub use system::SystemProbe;
