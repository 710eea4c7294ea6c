//! Error types surfaced while exporting the filtered view.

use thiserror::Error;

use crate::artefact::ArtefactWriteError;

/// Errors surfaced while serialising or writing an export.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExportError {
    /// The requested format name is not supported.
    #[error("unsupported export format '{value}': valid options are 'xlsx' or 'csv'")]
    UnsupportedFormat {
        /// The format name that failed to parse.
        value: String,
    },

    /// The destination path cannot name an output file.
    #[error("invalid export destination '{path}': {message}")]
    InvalidDestination {
        /// The rejected destination path.
        path: String,
        /// Why the destination was rejected.
        message: String,
    },

    /// The per-file row cap was zero.
    #[error("export row cap must be at least 1")]
    ZeroRowCap,

    /// Serialising records into the output format failed.
    #[error("failed to serialise export: {message}")]
    Serialise {
        /// Serialiser error detail.
        message: String,
    },

    /// Writing the output file failed.
    #[error("{message}")]
    Io {
        /// Write failure detail.
        message: String,
    },
}

impl From<ArtefactWriteError> for ExportError {
    fn from(error: ArtefactWriteError) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}
