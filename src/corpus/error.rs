//! Error types surfaced while loading review collections.

use thiserror::Error;

/// Errors surfaced while reading and parsing review input files.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoadError {
    /// No input files were supplied.
    #[error("at least one review file is required")]
    NoInputs,

    /// An input file could not be opened.
    #[error("cannot open review file '{path}': {message}")]
    FileOpen {
        /// Path of the file that failed to open.
        path: String,
        /// Error detail from the underlying open operation.
        message: String,
    },

    /// The delimited reader reported a malformed file.
    #[error("malformed review file '{path}': {message}")]
    Csv {
        /// Path of the file that failed to parse.
        path: String,
        /// Parser error detail.
        message: String,
    },

    /// A required column was absent from the header row.
    #[error("review file '{path}' is missing required column '{column}'")]
    MissingColumn {
        /// Path of the file with the incomplete header.
        path: String,
        /// Name of the column the schema requires.
        column: String,
    },

    /// A label cell held neither a known word nor a known numeric code.
    #[error("unrecognised sentiment label '{value}' at {path}:{line}")]
    Label {
        /// Path of the file containing the bad label.
        path: String,
        /// One-based line number of the offending row.
        line: u64,
        /// The cell content that could not be interpreted.
        value: String,
    },

    /// Configuration could not be loaded or was inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}
