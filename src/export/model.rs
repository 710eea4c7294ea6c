//! Export data models: the row projection and format selection.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::corpus::ReviewRecord;

use super::error::ExportError;

/// Column headers written to every export, in output order.
pub const EXPORT_HEADERS: [&str; 6] = ["title", "text", "sentiment", "rating", "product_id", "date"];

/// A review projected into the flat row shape exports use.
///
/// Optional metadata renders as empty cells so every export carries the same
/// columns regardless of which metadata the source files provided.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ExportedReview {
    /// Review title, empty when absent.
    pub title: String,
    /// Full review text.
    pub text: String,
    /// Sentiment label, `positive` or `negative`.
    pub sentiment: String,
    /// Star rating, empty when absent.
    pub rating: String,
    /// Product identifier, empty when absent.
    pub product_id: String,
    /// Review date, empty when absent.
    pub date: String,
}

impl From<&ReviewRecord> for ExportedReview {
    fn from(record: &ReviewRecord) -> Self {
        Self {
            title: record.title.clone().unwrap_or_default(),
            text: record.body.clone(),
            sentiment: record.sentiment.label().to_owned(),
            rating: record
                .rating
                .map_or_else(String::new, |rating| rating.to_string()),
            product_id: record.product_id.clone().unwrap_or_default(),
            date: record.date.clone().unwrap_or_default(),
        }
    }
}

/// Supported spreadsheet formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Excel workbook, one sheet.
    #[default]
    Xlsx,
    /// Comma-separated values with a header row.
    Csv,
}

impl ExportFormat {
    /// Returns the file extension for this format, without a leading dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Csv => "csv",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xlsx" | "excel" => Ok(Self::Xlsx),
            "csv" => Ok(Self::Csv),
            _ => Err(ExportError::UnsupportedFormat {
                value: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
