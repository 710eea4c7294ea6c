//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the core application state and update logic for the
//! review browser TUI. It coordinates between components, manages filter and
//! prompt state, and handles async reload, export and word cloud actions.
//!
//! # Module Structure
//!
//! - `navigation`: cursor movement and scrolling
//! - `rendering`: view rendering methods for terminal output
//! - `command_handlers`: async reload, export, cloud and search handling

use std::any::Any;

use bubbletea_rs::{Cmd, Model};

use crate::corpus::{ReviewRecord, Sentiment};

use super::components::{
    ReviewDetailComponent, ReviewDetailViewContext, ReviewListComponent, ReviewListViewContext,
};
use super::input::map_key_to_message;
use super::messages::AppMsg;
use super::state::{FilterState, ReviewFilter, SearchPromptState};

mod command_handlers;
mod navigation;
mod rendering;

/// Main application model for the review browser TUI.
#[derive(Debug)]
pub struct BrowserApp {
    /// All loaded reviews (unfiltered).
    pub(crate) records: Vec<ReviewRecord>,
    /// Cached indices of reviews matching the current filter.
    /// Invalidated when records or filter change.
    filtered_indices: Vec<usize>,
    /// Filter and cursor state.
    pub(crate) filter_state: FilterState,
    /// Similarity search prompt, present while the user is typing a query.
    pub(crate) search_prompt: Option<SearchPromptState>,
    /// Whether data is currently loading.
    pub(crate) loading: bool,
    /// Outcome message from the last completed action, if any.
    pub(crate) status: Option<String>,
    /// Current error message, if any.
    pub(crate) error: Option<String>,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Whether help overlay is visible.
    pub(crate) show_help: bool,
    /// Review list component.
    review_list: ReviewListComponent,
    /// Review detail component.
    review_detail: ReviewDetailComponent,
}

impl BrowserApp {
    /// Creates a new application with the given reviews.
    #[must_use]
    pub fn new(records: Vec<ReviewRecord>) -> Self {
        // Build initial cache with all indices (default filter is All)
        let filtered_indices: Vec<_> = (0..records.len()).collect();
        Self {
            records,
            filtered_indices,
            filter_state: FilterState::new(),
            search_prompt: None,
            loading: false,
            status: None,
            error: None,
            width: 80,
            height: 24,
            show_help: false,
            review_list: ReviewListComponent::new(),
            review_detail: ReviewDetailComponent::new(),
        }
    }

    /// Creates an empty application (for initial loading state).
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Returns the count of filtered reviews.
    #[must_use]
    pub fn filtered_count(&self) -> usize {
        self.filtered_indices.len()
    }

    /// Returns the active filter.
    #[must_use]
    pub const fn active_filter(&self) -> &ReviewFilter {
        &self.filter_state.active_filter
    }

    /// Returns the current cursor position.
    #[must_use]
    pub const fn cursor_position(&self) -> usize {
        self.filter_state.cursor_position
    }

    /// Rebuilds the filtered indices cache based on the current filter.
    ///
    /// Call this after modifying `records` or changing the active filter.
    pub(crate) fn rebuild_filter_cache(&mut self) {
        self.filtered_indices = self
            .records
            .iter()
            .enumerate()
            .filter(|&(index, record)| self.filter_state.active_filter.matches(index, record))
            .map(|(index, _)| index)
            .collect();
    }

    /// Returns a reference to the review under the cursor, if any.
    #[must_use]
    pub fn selected_record(&self) -> Option<&ReviewRecord> {
        self.filtered_indices
            .get(self.filter_state.cursor_position)
            .and_then(|&index| self.records.get(index))
    }

    /// Returns the records currently visible through the filter, cloned for
    /// handing to async artefact commands.
    pub(crate) fn visible_records(&self) -> Vec<ReviewRecord> {
        self.filtered_indices
            .iter()
            .filter_map(|&index| self.records.get(index).cloned())
            .collect()
    }

    /// Clamps the cursor after a filter or data change and keeps it visible.
    fn clamp_after_change(&mut self) {
        self.filter_state.clamp_cursor(self.filtered_count());
        self.adjust_scroll_to_cursor();
    }

    /// Handles a message and updates state accordingly.
    ///
    /// This method is the core update function that processes all
    /// application messages and returns any resulting commands. It delegates
    /// to specialised handlers to keep cyclomatic complexity low.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::CursorUp => self.handle_cursor_up(),
            AppMsg::CursorDown => self.handle_cursor_down(),
            AppMsg::PageUp => self.handle_page_up(),
            AppMsg::PageDown => self.handle_page_down(),
            AppMsg::Home => self.handle_home(),
            AppMsg::End => self.handle_end(),

            AppMsg::SetFilter(filter) => self.handle_set_filter(filter),
            AppMsg::ClearFilter => self.handle_clear_filter(),
            AppMsg::CycleFilter => self.handle_cycle_filter(),

            AppMsg::OpenSearchPrompt
            | AppMsg::SearchInput(_)
            | AppMsg::SearchBackspace
            | AppMsg::SearchSubmit
            | AppMsg::SearchCancel => self.handle_search_msg(msg),

            AppMsg::ReloadRequested => self.handle_reload_requested(),
            AppMsg::ReloadComplete(records) => self.handle_reload_complete(records),
            AppMsg::ReloadFailed(message) => self.handle_action_failed(message),
            AppMsg::ExportRequested => self.handle_export_requested(),
            AppMsg::ExportComplete { files, rows } => self.handle_export_complete(files, *rows),
            AppMsg::ExportFailed(message) | AppMsg::CloudFailed(message) => {
                self.handle_action_failed(message)
            }
            AppMsg::CloudRequested => self.handle_cloud_requested(),
            AppMsg::CloudComplete { path } => self.handle_cloud_complete(path),

            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::EscapePressed => self.handle_escape(),
            AppMsg::WindowResized { width, height } => self.handle_resize(*width, *height),
        }
    }

    // Filter handlers

    fn handle_set_filter(&mut self, filter: &ReviewFilter) -> Option<Cmd> {
        self.filter_state.active_filter = filter.clone();
        self.rebuild_filter_cache();
        self.clamp_after_change();
        None
    }

    fn handle_clear_filter(&mut self) -> Option<Cmd> {
        self.handle_set_filter(&ReviewFilter::All)
    }

    /// Cycles the active filter through `All`, `Positive` and `Negative`.
    ///
    /// A similarity filter resets to `All`: its query word cannot be cycled
    /// through without additional user input.
    fn handle_cycle_filter(&mut self) -> Option<Cmd> {
        let next_filter = match &self.filter_state.active_filter {
            ReviewFilter::All => ReviewFilter::Sentiment(Sentiment::Positive),
            ReviewFilter::Sentiment(sentiment) => match sentiment {
                Sentiment::Positive => ReviewFilter::Sentiment(Sentiment::Negative),
                Sentiment::Negative => ReviewFilter::All,
            },
            ReviewFilter::SimilarTo { .. } => ReviewFilter::All,
        };
        self.handle_set_filter(&next_filter)
    }

    // Lifecycle handlers

    /// Escape dismisses the topmost layer: help, then messages, then any
    /// active filter.
    fn handle_escape(&mut self) -> Option<Cmd> {
        if self.show_help {
            self.show_help = false;
            return None;
        }
        if self.error.is_some() || self.status.is_some() {
            self.error = None;
            self.status = None;
            return None;
        }
        self.handle_clear_filter()
    }

    // Window event handlers

    fn handle_resize(&mut self, width: u16, height: u16) -> Option<Cmd> {
        self.width = width;
        self.height = height;
        let list_height = height.saturating_sub(4) as usize;
        self.review_list.set_visible_height(list_height);
        None
    }
}

impl Model for BrowserApp {
    fn init() -> (Self, Option<Cmd>) {
        // Retrieve initial data from module-level storage
        let records = super::get_initial_records();
        (Self::new(records), None)
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        // Try to downcast to our message type
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        // Handle key events from bubbletea-rs
        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            let mapped = map_key_to_message(key_msg, self.search_prompt.is_some());
            if let Some(app_msg) = mapped {
                return self.handle_message(&app_msg);
            }
        }

        // Handle window size messages
        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        // If help is shown, render overlay instead
        if self.show_help {
            return self.render_help_overlay();
        }

        let mut output = String::new();

        output.push_str(&self.render_header());
        output.push_str(&self.render_filter_bar());
        output.push('\n');

        // Layout: header (1) + filter bar (1) + newline (1) + list + detail
        // + status bar (1). The detail pane keeps a minimum of 8 lines.
        let chrome_height = 4_usize;
        let detail_height = 8_usize;
        let total_height = self.height as usize;
        let list_height = total_height
            .saturating_sub(chrome_height)
            .saturating_sub(detail_height);

        let list_ctx = ReviewListViewContext {
            records: &self.records,
            filtered_indices: &self.filtered_indices,
            cursor_position: self.filter_state.cursor_position,
            scroll_offset: self.filter_state.scroll_offset,
            visible_height: list_height,
        };
        output.push_str(&self.review_list.view(&list_ctx));

        let detail_ctx = ReviewDetailViewContext {
            selected: self.selected_record(),
            max_width: 80.min(self.width as usize),
            max_height: detail_height,
        };
        output.push_str(&self.review_detail.view(&detail_ctx));

        output.push('\n');
        output.push_str(&self.render_status_bar());

        output
    }
}
