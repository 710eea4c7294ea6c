//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the application's
//! update function. Messages represent user actions, async command results,
//! and system events.

use crate::corpus::ReviewRecord;

use super::state::ReviewFilter;

/// Messages for the review browser TUI application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Navigation
    /// Move cursor up one item.
    CursorUp,
    /// Move cursor down one item.
    CursorDown,
    /// Move cursor up one page.
    PageUp,
    /// Move cursor down one page.
    PageDown,
    /// Move cursor to first item.
    Home,
    /// Move cursor to last item.
    End,

    // Filter changes
    /// Apply a new filter.
    SetFilter(ReviewFilter),
    /// Clear all filters (show all reviews).
    ClearFilter,
    /// Cycle through the sentiment filters.
    CycleFilter,

    // Similarity search prompt
    /// Open the search prompt.
    OpenSearchPrompt,
    /// A character was typed into the prompt.
    SearchInput(char),
    /// Remove the last character from the prompt.
    SearchBackspace,
    /// Run the search with the current prompt text.
    SearchSubmit,
    /// Close the prompt without searching.
    SearchCancel,

    // Data loading
    /// Request a reload of review data from the input files.
    ReloadRequested,
    /// Reload completed successfully with new data.
    ReloadComplete(Vec<ReviewRecord>),
    /// Reload failed with an error.
    ReloadFailed(String),

    // Artefact generation
    /// Request a spreadsheet export of the visible reviews.
    ExportRequested,
    /// Export completed successfully.
    ExportComplete {
        /// Paths of the files written.
        files: Vec<String>,
        /// Number of rows exported.
        rows: usize,
    },
    /// Export failed with an error.
    ExportFailed(String),
    /// Request a word cloud of the visible reviews.
    CloudRequested,
    /// Word cloud rendering completed successfully.
    CloudComplete {
        /// Path of the PNG written.
        path: String,
    },
    /// Word cloud rendering failed with an error.
    CloudFailed(String),

    // Application lifecycle
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,
    /// Escape pressed outside the prompt: dismiss overlays or clear filters.
    EscapePressed,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}
