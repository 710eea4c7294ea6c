//! Filter, cursor and prompt state for the review browser.

pub mod filter_state;
pub mod search_prompt;

pub use filter_state::{FilterState, ReviewFilter};
pub use search_prompt::SearchPromptState;
