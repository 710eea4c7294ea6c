//! Filter and cursor state for the review browser.
//!
//! This module provides types for managing which reviews are displayed and
//! tracking the user's position within the filtered list. Cursor position is
//! retained when filters change, clamped to the new valid range.

use crate::corpus::{ReviewRecord, Sentiment};

/// Filter criteria for the review listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReviewFilter {
    /// Show all reviews.
    #[default]
    All,
    /// Show only reviews carrying the given sentiment label.
    Sentiment(Sentiment),
    /// Show only reviews a similarity search matched.
    ///
    /// The matching record indices are computed once when the search runs
    /// and carried inside the filter, so re-applying it never re-scans the
    /// collection. Indices are sorted ascending.
    SimilarTo {
        /// The query word the search ran with.
        word: String,
        /// Sorted indices of matching records in the full collection.
        indices: Vec<usize>,
        /// Distinct similar words found, for display.
        matched_words: Vec<String>,
    },
}

impl ReviewFilter {
    /// Returns a human-readable label for display in the UI.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::All => "All".to_owned(),
            Self::Sentiment(sentiment) => {
                let mut label = sentiment.label().to_owned();
                if let Some(first) = label.get(..1) {
                    label = format!("{}{}", first.to_uppercase(), label.get(1..).unwrap_or(""));
                }
                label
            }
            Self::SimilarTo { word, .. } => format!("Similar to '{word}'"),
        }
    }

    /// Returns true when this filter matches the record at `index`.
    #[must_use]
    pub fn matches(&self, index: usize, record: &ReviewRecord) -> bool {
        match self {
            Self::All => true,
            Self::Sentiment(sentiment) => record.sentiment == *sentiment,
            Self::SimilarTo { indices, .. } => indices.binary_search(&index).is_ok(),
        }
    }
}

/// State managing the active filter and cursor position.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    /// Currently active filter.
    pub active_filter: ReviewFilter,
    /// Current cursor position (0-indexed) within the filtered list.
    pub cursor_position: usize,
    /// Scroll offset for virtual scrolling (lines scrolled from top).
    pub scroll_offset: usize,
}

impl FilterState {
    /// Creates a new filter state with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the filter and clamps the cursor to valid range.
    pub fn set_filter(&mut self, filter: ReviewFilter, new_count: usize) {
        self.active_filter = filter;
        self.clamp_cursor(new_count);
    }

    /// Clamps the cursor position to be within the valid range.
    ///
    /// If the list is empty, cursor and scroll reset to 0. If the cursor
    /// exceeds the list length, it moves to the last valid index.
    pub const fn clamp_cursor(&mut self, count: usize) {
        if count == 0 {
            self.cursor_position = 0;
            self.scroll_offset = 0;
        } else if self.cursor_position >= count {
            self.cursor_position = count.saturating_sub(1);
        }
    }

    /// Moves the cursor up by one position if possible.
    pub const fn cursor_up(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    /// Moves the cursor down by one position if within bounds.
    pub const fn cursor_down(&mut self, max_index: usize) {
        if self.cursor_position < max_index {
            self.cursor_position = self.cursor_position.saturating_add(1);
        }
    }

    /// Moves the cursor to the first item and resets scrolling.
    pub const fn home(&mut self) {
        self.cursor_position = 0;
        self.scroll_offset = 0;
    }

    /// Moves the cursor to the last item.
    pub const fn end(&mut self, max_index: usize) {
        self.cursor_position = max_index;
    }
}
