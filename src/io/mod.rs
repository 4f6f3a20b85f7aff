//! Input/output collaborators: command line, themes, canvas export and errors

/// Raster canvas and image export
pub mod canvas;
/// Command-line parsing and job orchestration
pub mod cli;
/// Generation constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Terminal progress display
pub mod progress;
/// Built-in color themes
pub mod theme;
