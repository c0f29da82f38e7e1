//! Command-line surface, configuration and error handling

/// Command-line interface for running movement trials
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Progress display for long trial runs
pub mod progress;
