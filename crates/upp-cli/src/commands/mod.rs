//! Command implementations for upp-cli

pub mod build;
pub mod inspect;
pub mod project;

pub use build::run_build;
pub use inspect::run_inspect;
