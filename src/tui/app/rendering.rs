//! Rendering logic for the review browser application.
//!
//! This module contains the view rendering methods that produce string
//! output for display in the terminal. These are pure query methods that
//! read state without modification.

use super::BrowserApp;

impl BrowserApp {
    /// Renders the header bar.
    pub(super) fn render_header(&self) -> String {
        let title = "Revue - Product Reviews";
        let loading_indicator = if self.loading { " [Loading...]" } else { "" };
        format!("{title}{loading_indicator}\n")
    }

    /// Renders the filter bar showing the active filter.
    pub(super) fn render_filter_bar(&self) -> String {
        let label = self.filter_state.active_filter.label();
        let count = self.filtered_count();
        let total = self.records.len();
        format!("Filter: {label} ({count}/{total})\n")
    }

    /// Renders the status bar.
    ///
    /// The open search prompt takes priority, then errors, then action
    /// outcomes, then the key hints.
    pub(super) fn render_status_bar(&self) -> String {
        if let Some(prompt) = &self.search_prompt {
            return format!("Search word: {}_\n", prompt.text());
        }

        if let Some(error) = &self.error {
            return format!("Error: {error}\n");
        }

        if let Some(status) = &self.status {
            return format!("{status}\n");
        }

        format!("{}\n", self.status_hints())
    }

    /// Renders the help overlay if visible.
    pub(super) fn render_help_overlay(&self) -> String {
        if !self.show_help {
            return String::new();
        }

        let help_text = r"
=== Keyboard Shortcuts ===

Navigation:
  j, Down    Move cursor down
  k, Up      Move cursor up
  PgDn       Page down
  PgUp       Page up
  Home, g    Go to first review
  End, G     Go to last review

Filtering:
  p          Show positive reviews
  n          Show negative reviews
  f          Cycle filter (All/Positive/Negative)
  /          Search for similar words
  Esc        Clear filter

Artefacts:
  e          Export the visible reviews to a spreadsheet
  w          Render a word cloud of the visible reviews

Other:
  r          Reload the input files
  ?          Toggle this help
  q          Quit

Search prompt:
  text keys  Edit the query word
  Backspace  Delete one character
  Enter      Run the search
  Esc        Cancel

Press any key to close this help.
";
        help_text.to_owned()
    }

    const fn status_hints(&self) -> &'static str {
        if self.width <= 80 {
            "q:quit  ?:help  j/k:move  f:filter  /:search"
        } else {
            "j/k:move  p/n/f:filter  /:search  e:export  w:cloud  r:reload  ?:help  q:quit"
        }
    }
}
