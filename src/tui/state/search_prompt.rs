//! Input state for the similarity search prompt.

/// Maximum length of a search query in characters.
const MAX_QUERY_CHARS: usize = 64;

/// Text being typed into the similarity search prompt.
#[derive(Debug, Clone, Default)]
pub struct SearchPromptState {
    text: String,
}

impl SearchPromptState {
    /// Creates an empty prompt.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a character, ignoring input beyond the length cap.
    pub fn push_char(&mut self, ch: char) {
        if self.text.chars().count() < MAX_QUERY_CHARS {
            self.text.push(ch);
        }
    }

    /// Removes the last character, if any.
    pub fn backspace(&mut self) {
        self.text.pop();
    }

    /// Returns the current query text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns true when the query contains no non-whitespace characters.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
