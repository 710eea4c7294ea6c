//! Detail component for rendering the selected review.
//!
//! Displays the selected review's title, metadata line (sentiment, rating,
//! product and date where present), and the full body wrapped to a maximum
//! width (typically 80 columns or the terminal width if narrower).

use crate::corpus::ReviewRecord;

use super::text_truncate::truncate_to_height;
use super::text_wrap::wrap_text;

/// Placeholder message when no review is selected.
const NO_SELECTION_PLACEHOLDER: &str = "(No review selected)";

/// Context for rendering the review detail view.
///
/// Bundles the data needed to render a detail pane without requiring
/// per-frame allocations.
#[derive(Debug, Clone)]
pub struct ReviewDetailViewContext<'a> {
    /// The selected review to display, if any.
    pub selected: Option<&'a ReviewRecord>,
    /// Maximum width for body wrapping (typically 80).
    pub max_width: usize,
    /// Maximum height in lines for the detail pane (0 = unlimited).
    pub max_height: usize,
}

/// Component for displaying a single review in full.
#[derive(Debug, Default, Clone)]
pub struct ReviewDetailComponent;

impl ReviewDetailComponent {
    /// Creates a new review detail component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the review detail as a string.
    ///
    /// Returns a separator line, the review title, a metadata line, and the
    /// wrapped body. If no review is selected, returns a placeholder message.
    /// Output is truncated to `max_height` lines if specified (> 0).
    #[must_use]
    pub fn view(&self, ctx: &ReviewDetailViewContext<'_>) -> String {
        let Some(record) = ctx.selected else {
            return format!("{NO_SELECTION_PLACEHOLDER}\n");
        };

        let mut output = String::new();

        output.push_str(&"\u{2500}".repeat(ctx.max_width));
        output.push('\n');

        output.push_str(record.display_title());
        output.push('\n');

        output.push_str(&Self::render_metadata(record));
        output.push_str("\n\n");

        output.push_str(&wrap_text(&record.body, ctx.max_width));
        output.push('\n');

        if ctx.max_height > 0 {
            truncate_to_height(&mut output, ctx.max_height);
        }

        output
    }

    /// Renders the metadata line: sentiment always, then rating, product and
    /// date when the source file provided them.
    fn render_metadata(record: &ReviewRecord) -> String {
        let mut parts = vec![format!("sentiment: {}", record.sentiment)];
        if let Some(rating) = record.rating {
            parts.push(format!("rating: {rating}/5"));
        }
        if let Some(product_id) = record.product_id.as_deref() {
            parts.push(format!("product: {product_id}"));
        }
        if let Some(date) = record.date.as_deref() {
            parts.push(format!("date: {date}"));
        }
        parts.join("  |  ")
    }
}
