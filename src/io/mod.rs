/// Command-line parsing and batch generation
pub mod cli;
/// Generation constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG rasterisation and export
pub mod image;
/// Diagnostic logging setup
pub mod logging;
/// Progress bars for batch generation
pub mod progress;
/// README section templating
pub mod readme;
