//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur while setting up an extraction
///
/// Extraction itself cannot fail; only a bad configuration is rejected.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
