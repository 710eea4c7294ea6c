//! Deterministic flow layout for word cloud glyphs.
//!
//! Words arrive sorted by frequency and are placed left to right, wrapping
//! onto new rows when a word would overflow the canvas. Font sizes scale
//! linearly between a configured minimum and maximum, so the only promise
//! the layout makes is the one the renderer needs: more frequent words draw
//! larger. Words that no longer fit on the canvas are dropped.

use serde::Serialize;

use crate::analysis::WordFrequency;

/// Canvas dimensions and font size bounds for the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSpec {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Font size assigned to the least frequent word.
    pub min_font_size: u32,
    /// Font size assigned to the most frequent word.
    pub max_font_size: u32,
}

/// Default word cloud canvas: 800x500 with font sizes from 14 to 64.
impl Default for CanvasSpec {
    fn default() -> Self {
        Self {
            width: 800,
            height: 500,
            min_font_size: 14,
            max_font_size: 64,
        }
    }
}

/// A word positioned on the canvas, ready for the SVG template.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PlacedWord {
    /// The word to draw.
    pub text: String,
    /// Left edge of the text run, in pixels.
    pub x: u32,
    /// Baseline of the text run, in pixels.
    pub y: u32,
    /// Font size in pixels.
    pub size: u32,
    /// Fill colour as a hex string.
    pub colour: &'static str,
}

/// Gap in pixels between words and between rows.
const GAP: u32 = 10;

/// Fill colours cycled across placed words.
const PALETTE: [&str; 7] = [
    "#1f77b4", "#d62728", "#2ca02c", "#ff7f0e", "#9467bd", "#8c564b", "#17becf",
];

/// Flows the given frequencies onto the canvas.
///
/// `frequencies` must already be sorted most frequent first, as
/// [`crate::analysis::word_frequencies`] returns them; sizes then decrease
/// monotonically, which lets each row take its height from its first word.
#[must_use]
pub fn layout_words(frequencies: &[WordFrequency], canvas: CanvasSpec) -> Vec<PlacedWord> {
    let Some(first) = frequencies.first() else {
        return Vec::new();
    };
    let max_count = first.count;
    let min_count = frequencies.last().map_or(max_count, |f| f.count);

    let mut placed = Vec::new();
    let mut x = GAP;
    let mut row_top = GAP;
    let mut row_height = 0u32;

    for (index, frequency) in frequencies.iter().enumerate() {
        let size = scale_font_size(frequency.count, min_count, max_count, canvas);
        let advance = estimated_width(&frequency.word, size);

        if x.saturating_add(advance) > canvas.width && x > GAP {
            row_top = row_top.saturating_add(row_height).saturating_add(GAP);
            x = GAP;
            row_height = 0;
        }
        if row_height == 0 {
            row_height = size;
        }

        let baseline = row_top.saturating_add(size);
        if baseline > canvas.height {
            break;
        }

        placed.push(PlacedWord {
            text: frequency.word.clone(),
            x,
            y: baseline,
            size,
            colour: palette_colour(index),
        });
        x = x.saturating_add(advance).saturating_add(GAP);
    }

    placed
}

/// Scales a count linearly into the configured font size range.
#[expect(
    clippy::integer_division,
    reason = "font sizes round down to whole pixels by design"
)]
fn scale_font_size(count: usize, min_count: usize, max_count: usize, canvas: CanvasSpec) -> u32 {
    if max_count <= min_count {
        return canvas.max_font_size;
    }

    let span = u64::from(canvas.max_font_size.saturating_sub(canvas.min_font_size));
    let numerator = u64::try_from(count.saturating_sub(min_count)).unwrap_or(u64::MAX);
    let denominator = u64::try_from(max_count.saturating_sub(min_count))
        .unwrap_or(u64::MAX)
        .max(1);
    let offset = numerator.saturating_mul(span) / denominator;
    let offset = u32::try_from(offset).unwrap_or(canvas.max_font_size);
    canvas.min_font_size.saturating_add(offset)
}

/// Estimates the rendered width of a word at the given font size.
///
/// Assumes an average glyph advance of 0.6em, which is generous enough for
/// common sans-serif faces that words do not collide.
#[expect(
    clippy::integer_division,
    reason = "pixel estimate rounds down to whole pixels by design"
)]
fn estimated_width(word: &str, size: u32) -> u32 {
    let glyphs = u32::try_from(word.chars().count()).unwrap_or(u32::MAX);
    glyphs.saturating_mul(size).saturating_mul(3) / 5
}

fn palette_colour(index: usize) -> &'static str {
    let slot = index.checked_rem(PALETTE.len()).unwrap_or(0);
    PALETTE.get(slot).copied().unwrap_or("#1f77b4")
}
