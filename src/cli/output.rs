//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use crate::corpus::{ReviewCollection, Sentiment};

use super::CliError;

/// Writes a per-sentiment summary of the collection to stdout.
///
/// # Errors
///
/// Returns [`CliError::Io`] when stdout cannot be written.
pub fn write_summary(collection: &ReviewCollection) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    write_summary_to(&mut stdout, collection)
}

/// Writes a per-sentiment summary of the collection to the given writer.
///
/// # Errors
///
/// Returns [`CliError::Io`] when the writer fails.
pub fn write_summary_to<W: Write>(
    writer: &mut W,
    collection: &ReviewCollection,
) -> Result<(), CliError> {
    writeln!(
        writer,
        "Loaded {} reviews from {} file(s)",
        collection.len(),
        collection.sources().len()
    )
    .map_err(|e| io_error(&e))?;

    for sentiment in [Sentiment::Positive, Sentiment::Negative] {
        writeln!(
            writer,
            "  {}: {}",
            sentiment.label(),
            collection.count_with_sentiment(sentiment)
        )
        .map_err(|e| io_error(&e))?;
    }

    Ok(())
}

/// Writes a one-line message to stdout.
///
/// # Errors
///
/// Returns [`CliError::Io`] when stdout cannot be written.
pub fn write_line(message: &str) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{message}").map_err(|e| io_error(&e))
}

pub(crate) fn io_error(error: &io::Error) -> CliError {
    CliError::Io {
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use crate::corpus::test_support::example_collection;

    use super::*;

    #[test]
    fn summary_lists_total_and_per_sentiment_counts() {
        let mut buffer = Vec::new();

        write_summary_to(&mut buffer, &example_collection()).expect("should write summary");

        let output = String::from_utf8(buffer).expect("summary should be UTF-8");
        assert!(output.contains("Loaded 2 reviews from 0 file(s)"));
        assert!(output.contains("  positive: 1"));
        assert!(output.contains("  negative: 1"));
    }
}
