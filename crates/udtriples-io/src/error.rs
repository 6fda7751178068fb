//! Error types for reading and writing datasets

use std::convert::Infallible;
use std::path::PathBuf;
use thiserror::Error;
use udtriples_extractor::ExtractorError;

/// Errors that abort a conversion run
///
/// Every variant is fatal; nothing is retried or skipped.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Input file missing or unreadable
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Output file could not be written
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// Destination file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Malformed CoNLL-U reported by the parser
    #[error("CoNLL-U parse error in sentence {sentence}: {message}")]
    Parse {
        /// 1-based sentence number
        sentence: usize,
        /// Parser message
        message: String,
    },

    /// A token lacks a field the conversion needs
    #[error("Sentence {sentence}, token {token} ('{form}'): missing {field}")]
    MissingField {
        /// 1-based sentence number
        sentence: usize,
        /// 1-based token number within the sentence
        token: usize,
        /// Surface form of the offending token
        form: String,
        /// Name of the missing field
        field: &'static str,
    },

    /// Stream write error without a file path (stdout, in-memory buffers)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Extractor rejected its configuration
    #[error(transparent)]
    Extractor(#[from] ExtractorError),

    /// Invalid dataset setup
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<Infallible> for DatasetError {
    fn from(e: Infallible) -> Self {
        match e {}
    }
}
