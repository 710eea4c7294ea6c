//! Word cloud rendering: frequencies to SVG to PNG.
//!
//! The pipeline is tokenise, drop stopwords, count, lay out, render SVG,
//! rasterise. Layout and SVG rendering are deterministic; rasterisation
//! goes through `usvg`/`resvg` onto a `tiny-skia` pixmap with whatever
//! system fonts `fontdb` discovers.
//!
//! # Modules
//!
//! - [`layout`]: font scaling and flow placement
//! - [`svg`]: `MiniJinja`-templated SVG document
//! - [`error`]: [`RenderError`] taxonomy

pub mod error;
pub mod layout;
pub mod svg;

use std::sync::Arc;

use tracing::{debug, warn};

use crate::analysis::{StopwordSet, word_frequencies};

pub use error::RenderError;
pub use layout::{CanvasSpec, PlacedWord};

/// Knobs for the whole cloud pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CloudOptions {
    /// Canvas dimensions and font size bounds.
    pub canvas: CanvasSpec,
    /// Number of most frequent words to draw.
    pub max_words: usize,
}

impl CloudOptions {
    /// Returns the configured word limit, defaulting to 20 when zero.
    #[must_use]
    pub const fn word_limit(&self) -> usize {
        if self.max_words == 0 { 20 } else { self.max_words }
    }
}

/// Renders a word cloud PNG from the given texts.
///
/// # Errors
///
/// Returns [`RenderError::EmptyCloud`] when no non-stopword words remain,
/// [`RenderError::Template`] or [`RenderError::Svg`] when document
/// generation fails, and [`RenderError::Raster`] when rasterisation or PNG
/// encoding fails.
pub fn render_cloud_png<'a, I>(
    texts: I,
    stopwords: &StopwordSet,
    options: &CloudOptions,
) -> Result<Vec<u8>, RenderError>
where
    I: IntoIterator<Item = &'a str>,
{
    let frequencies = word_frequencies(texts, stopwords, options.word_limit());
    if frequencies.is_empty() {
        return Err(RenderError::EmptyCloud);
    }

    let placed = layout::layout_words(&frequencies, options.canvas);
    let document = svg::render_svg(&placed, options.canvas)?;
    debug!(words = placed.len(), "word cloud laid out");

    rasterise(&document, options.canvas)
}

/// Rasterises an SVG document onto a canvas-sized pixmap and encodes PNG.
fn rasterise(document: &str, canvas: CanvasSpec) -> Result<Vec<u8>, RenderError> {
    let mut fonts = fontdb::Database::new();
    fonts.load_system_fonts();
    if fonts.is_empty() {
        // Text nodes silently rasterise to nothing without fonts; the image
        // is still produced so the operation degrades rather than fails.
        warn!("no system fonts found; word cloud text will not be drawn");
    }

    let mut svg_options = usvg::Options::default();
    svg_options.fontdb = Arc::new(fonts);

    let tree = usvg::Tree::from_str(document, &svg_options).map_err(|error| RenderError::Svg {
        message: error.to_string(),
    })?;

    let mut pixmap =
        tiny_skia::Pixmap::new(canvas.width, canvas.height).ok_or_else(|| RenderError::Raster {
            message: format!("invalid pixmap dimensions {}x{}", canvas.width, canvas.height),
        })?;
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    pixmap.encode_png().map_err(|error| RenderError::Raster {
        message: error.to_string(),
    })
}
