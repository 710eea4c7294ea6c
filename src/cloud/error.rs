//! Error types surfaced while rendering the word cloud.

use thiserror::Error;

use crate::artefact::ArtefactWriteError;

/// Errors surfaced while laying out, rendering or writing a word cloud.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    /// No words survived stopword removal.
    #[error("no words to draw: the filtered view has no non-stopword text")]
    EmptyCloud,

    /// The SVG template failed to parse or render.
    #[error("word cloud template error: {message}")]
    Template {
        /// Template engine error detail.
        message: String,
    },

    /// The rendered SVG document could not be parsed for rasterisation.
    #[error("word cloud SVG error: {message}")]
    Svg {
        /// SVG parser error detail.
        message: String,
    },

    /// Rasterising or encoding the image failed.
    #[error("word cloud raster error: {message}")]
    Raster {
        /// Rasteriser or encoder error detail.
        message: String,
    },

    /// Writing the image file failed.
    #[error("{message}")]
    Io {
        /// Write failure detail.
        message: String,
    },
}

impl From<ArtefactWriteError> for RenderError {
    fn from(error: ArtefactWriteError) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}
