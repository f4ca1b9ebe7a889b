//! Demo wiring: configuration, presentation, and the walkthrough scenario.

pub mod config;
pub mod presenter;
pub mod scenario;

pub use config::{DemoConfig, OutputFormat};
