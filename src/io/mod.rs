//! Input/output operations, configuration and error handling

/// Command-line parsing and the render job
pub mod cli;
/// Parameter bounds and defaults
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// PNG export
pub mod image;
/// Tracing subscriber setup
pub mod logging;
/// Tile progress display
pub mod progress;
