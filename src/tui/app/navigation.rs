//! Navigation handlers and cursor management.
//!
//! Each navigation method updates the cursor position and then adjusts the
//! scroll offset so the cursor remains within the visible window.

use bubbletea_rs::Cmd;

use super::BrowserApp;

impl BrowserApp {
    /// Adjusts the scroll offset so the cursor remains within the viewport.
    pub(super) const fn adjust_scroll_to_cursor(&mut self) {
        let cursor_position = self.filter_state.cursor_position;
        let scroll_offset = self.filter_state.scroll_offset;
        let visible_height = self.review_list.visible_height();

        if cursor_position < scroll_offset {
            self.filter_state.scroll_offset = cursor_position;
            return;
        }

        let viewport_end = scroll_offset.saturating_add(visible_height);
        if cursor_position >= viewport_end {
            self.filter_state.scroll_offset =
                cursor_position.saturating_sub(visible_height.saturating_sub(1));
        }
    }

    fn move_cursor_up(&mut self, step: usize) {
        self.filter_state.cursor_position = self.filter_state.cursor_position.saturating_sub(step);
    }

    fn move_cursor_down(&mut self, step: usize) {
        let max_index = self.filtered_count().saturating_sub(1);
        self.filter_state.cursor_position = self
            .filter_state
            .cursor_position
            .saturating_add(step)
            .min(max_index);
    }

    /// Handles cursor up navigation.
    pub(super) fn handle_cursor_up(&mut self) -> Option<Cmd> {
        self.move_cursor_up(1);
        self.adjust_scroll_to_cursor();
        None
    }

    /// Handles cursor down navigation.
    pub(super) fn handle_cursor_down(&mut self) -> Option<Cmd> {
        self.move_cursor_down(1);
        self.adjust_scroll_to_cursor();
        None
    }

    /// Handles page up navigation.
    pub(super) fn handle_page_up(&mut self) -> Option<Cmd> {
        let page_size = self.review_list.visible_height();
        self.move_cursor_up(page_size);
        self.adjust_scroll_to_cursor();
        None
    }

    /// Handles page down navigation.
    pub(super) fn handle_page_down(&mut self) -> Option<Cmd> {
        let page_size = self.review_list.visible_height();
        self.move_cursor_down(page_size);
        self.adjust_scroll_to_cursor();
        None
    }

    /// Handles Home key navigation.
    pub(super) fn handle_home(&mut self) -> Option<Cmd> {
        self.filter_state.home();
        None
    }

    /// Handles End key navigation.
    pub(super) fn handle_end(&mut self) -> Option<Cmd> {
        let max_index = self.filtered_count().saturating_sub(1);
        self.filter_state.end(max_index);
        self.adjust_scroll_to_cursor();
        None
    }
}
