//! Text analysis over the loaded corpus.
//!
//! Two operations live here, both delegating their heavy lifting to
//! off-the-shelf crates: similarity search matches review tokens against a
//! query word using `strsim`'s Jaro-Winkler metric, and word-frequency
//! counting feeds the word cloud after dropping `stop-words` list entries.
//!
//! # Modules
//!
//! - [`tokens`]: shared tokenizer and stopword sets
//! - [`similarity`]: query validation and similarity search
//! - [`frequency`]: top-N word frequency counting

pub mod frequency;
pub mod similarity;
pub mod tokens;

pub use frequency::{WordFrequency, word_frequencies};
pub use similarity::{
    DEFAULT_SIMILARITY_THRESHOLD, SearchError, SearchOutcome, SimilarityQuery, search_similar,
};
pub use tokens::{StopwordSet, tokenize};
