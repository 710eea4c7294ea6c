//! Input handling for the TUI application.
//!
//! This module provides key-to-message mapping for translating terminal key
//! events into application messages. When the search prompt is open, printable
//! keys feed the prompt instead of triggering shortcuts.

use crate::corpus::Sentiment;

use super::messages::AppMsg;
use super::state::ReviewFilter;

/// Maps a key event to an application message.
///
/// `prompt_active` routes printable characters into the search prompt.
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
pub fn map_key_to_message(key: &bubbletea_rs::event::KeyMsg, prompt_active: bool) -> Option<AppMsg> {
    use crossterm::event::KeyCode;

    if prompt_active {
        return match key.key {
            KeyCode::Char(ch) => Some(AppMsg::SearchInput(ch)),
            KeyCode::Backspace => Some(AppMsg::SearchBackspace),
            KeyCode::Enter => Some(AppMsg::SearchSubmit),
            KeyCode::Esc => Some(AppMsg::SearchCancel),
            _ => None,
        };
    }

    match key.key {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::PageDown => Some(AppMsg::PageDown),
        KeyCode::PageUp => Some(AppMsg::PageUp),
        KeyCode::Home | KeyCode::Char('g') => Some(AppMsg::Home),
        KeyCode::End | KeyCode::Char('G') => Some(AppMsg::End),
        KeyCode::Char('p') => Some(AppMsg::SetFilter(ReviewFilter::Sentiment(
            Sentiment::Positive,
        ))),
        KeyCode::Char('n') => Some(AppMsg::SetFilter(ReviewFilter::Sentiment(
            Sentiment::Negative,
        ))),
        KeyCode::Char('f') => Some(AppMsg::CycleFilter),
        KeyCode::Char('/') => Some(AppMsg::OpenSearchPrompt),
        KeyCode::Char('e') => Some(AppMsg::ExportRequested),
        KeyCode::Char('w') => Some(AppMsg::CloudRequested),
        KeyCode::Char('r') => Some(AppMsg::ReloadRequested),
        KeyCode::Esc => Some(AppMsg::EscapePressed),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}
