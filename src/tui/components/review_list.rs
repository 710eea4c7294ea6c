//! Review list component for displaying filtered reviews.
//!
//! This component renders a scrollable list of reviews with cursor
//! highlighting and a sentiment tag for each entry.

use crate::corpus::ReviewRecord;

use super::text_truncate::truncate_to_display_width_with_ellipsis;

/// Default visible height for the review list component.
const DEFAULT_VISIBLE_HEIGHT: usize = 20;

/// Display width budget for each review's preview text.
const PREVIEW_WIDTH: usize = 60;

/// Context for rendering the review list view.
///
/// Bundles the data needed to render a filtered list of reviews without
/// requiring per-frame allocations.
#[derive(Debug, Clone)]
pub struct ReviewListViewContext<'a> {
    /// Full slice of all loaded reviews.
    pub records: &'a [ReviewRecord],
    /// Indices of reviews matching the current filter.
    pub filtered_indices: &'a [usize],
    /// Current cursor position (0-indexed).
    pub cursor_position: usize,
    /// Number of lines scrolled from top.
    pub scroll_offset: usize,
    /// Maximum visible height in lines (for layout calculations).
    pub visible_height: usize,
}

/// Component for displaying a scrollable list of reviews.
#[derive(Debug, Clone)]
pub struct ReviewListComponent {
    /// Visible height in lines (for scrolling calculations).
    visible_height: usize,
}

impl Default for ReviewListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewListComponent {
    /// Creates a new review list component.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            visible_height: DEFAULT_VISIBLE_HEIGHT,
        }
    }

    /// Updates the visible height for scrolling calculations.
    pub const fn set_visible_height(&mut self, height: usize) {
        self.visible_height = height;
    }

    /// Returns the visible height.
    #[must_use]
    pub const fn visible_height(&self) -> usize {
        self.visible_height
    }

    /// Renders the review list as a string.
    ///
    /// Only renders reviews within the visible window (based on scroll offset
    /// and visible height) so large collections stay cheap to draw.
    #[must_use]
    pub fn view(&self, ctx: &ReviewListViewContext<'_>) -> String {
        if ctx.filtered_indices.is_empty() {
            return "  No reviews match the current filter.\n".to_owned();
        }

        let mut output = String::new();

        let visible_height = if ctx.visible_height > 0 {
            ctx.visible_height
        } else {
            self.visible_height
        };

        let start = ctx.scroll_offset;
        let end = (ctx.scroll_offset + visible_height).min(ctx.filtered_indices.len());

        for (display_index, &record_index) in ctx
            .filtered_indices
            .iter()
            .enumerate()
            .skip(start)
            .take(end.saturating_sub(start))
        {
            let Some(record) = ctx.records.get(record_index) else {
                continue;
            };
            let prefix = if display_index == ctx.cursor_position {
                ">"
            } else {
                " "
            };
            output.push_str(&Self::format_review_line(record, prefix));
            output.push('\n');
        }

        output
    }

    /// Formats a single review line for display.
    fn format_review_line(record: &ReviewRecord, prefix: &str) -> String {
        let preview = preview_text(record);
        format!("{prefix} [{}] {preview}", record.sentiment)
    }
}

/// Builds a one-line preview: the title when present, otherwise the first
/// line of the body, truncated to the preview width.
fn preview_text(record: &ReviewRecord) -> String {
    let source = record.display_title();
    let first_line = source.lines().next().unwrap_or("").trim();
    truncate_to_display_width_with_ellipsis(first_line, PREVIEW_WIDTH)
}
