//! Command runner infrastructure module

mod process;

pub use process::ProcessRunner;
