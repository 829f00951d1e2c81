//! Shared test utilities for the uni-project-private workspace.
//!
//! This crate provides standardised project fixtures so crate test suites
//! don't each hand-roll the `src/` tree and configuration document. It is a
//! dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`project`]: [`TestProject`] builder for a temporary uni-app project

pub mod project;

pub use project::{TestProject, component, config_document};
