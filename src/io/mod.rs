//! Configuration, command-line interface, and error handling

/// Command-line interface for generating SVG pattern files
pub mod cli;
/// Rendering defaults and runtime configuration
pub mod configuration;
/// Error types for pipeline operations
pub mod error;
