//! Tokenisation and stopword sets shared by search and frequency counting.

use std::collections::HashSet;

use stop_words::LANGUAGE;
use tracing::debug;

/// Splits text into lowercase word tokens.
///
/// Tokens are maximal runs of alphanumeric characters; punctuation and
/// whitespace separate them. Apostrophes split their word, so "don't"
/// yields "don" and "t", matching the word-boundary behaviour of the
/// frequency counts the word cloud is built from.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// A set of stopwords excluded from word-frequency counts.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Builds a stopword set for the named language.
    ///
    /// Language names are matched case-insensitively against the lists the
    /// `stop-words` crate bundles. Unrecognised names fall back to English
    /// with a diagnostic, keeping an odd configuration value from disabling
    /// stopword removal entirely.
    #[must_use]
    pub fn for_language(language: Option<&str>) -> Self {
        let requested = language.unwrap_or("english");
        let resolved = match requested.to_lowercase().as_str() {
            "english" => LANGUAGE::English,
            "french" => LANGUAGE::French,
            "german" => LANGUAGE::German,
            "spanish" => LANGUAGE::Spanish,
            "italian" => LANGUAGE::Italian,
            "portuguese" => LANGUAGE::Portuguese,
            "dutch" => LANGUAGE::Dutch,
            other => {
                debug!(language = other, "unknown stopword language, using english");
                LANGUAGE::English
            }
        };

        let words = stop_words::get(resolved)
            .into_iter()
            .map(|word| word.to_lowercase())
            .collect();
        Self { words }
    }

    /// Builds an empty set that excludes nothing.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns whether the given lowercase token is a stopword.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Great product!", vec!["great", "product"])]
    #[case("it's 10/10, honestly", vec!["it", "s", "10", "10", "honestly"])]
    #[case("", vec![])]
    #[case("   ...   ", vec![])]
    fn tokenize_lowercases_and_strips_punctuation(
        #[case] text: &str,
        #[case] expected: Vec<&str>,
    ) {
        assert_eq!(tokenize(text), expected);
    }

    #[rstest]
    fn english_stopwords_contain_common_function_words() {
        let stopwords = StopwordSet::for_language(Some("english"));
        assert!(stopwords.contains("the"));
        assert!(stopwords.contains("and"));
        assert!(!stopwords.contains("blender"));
    }

    #[rstest]
    fn unknown_language_falls_back_to_english() {
        let stopwords = StopwordSet::for_language(Some("klingon"));
        assert!(stopwords.contains("the"));
    }

    #[rstest]
    fn empty_set_excludes_nothing() {
        let stopwords = StopwordSet::none();
        assert!(!stopwords.contains("the"));
    }
}
