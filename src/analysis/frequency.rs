//! Word-frequency counting for the word cloud.

use std::collections::HashMap;

use super::tokens::{StopwordSet, tokenize};

/// A word and the number of times it occurs across the analysed texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordFrequency {
    /// The counted word, lowercase.
    pub word: String,
    /// Occurrence count across all texts.
    pub count: usize,
}

/// Counts non-stopword tokens across the given texts and returns the
/// `top_n` most frequent.
///
/// Ties are broken alphabetically so the result is deterministic. Single
/// characters are skipped; they are almost always tokenisation debris
/// ("don't" contributing "t") rather than words worth drawing.
#[must_use]
pub fn word_frequencies<'a, I>(texts: I, stopwords: &StopwordSet, top_n: usize) -> Vec<WordFrequency>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    for text in texts {
        for token in tokenize(text) {
            if token.chars().count() < 2 || stopwords.contains(&token) {
                continue;
            }
            *counts.entry(token).or_insert(0) += 1;
        }
    }

    let mut frequencies: Vec<WordFrequency> = counts
        .into_iter()
        .map(|(word, count)| WordFrequency { word, count })
        .collect();
    frequencies.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    frequencies.truncate(top_n);
    frequencies
}
