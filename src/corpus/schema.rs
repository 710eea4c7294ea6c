//! Column schema resolution for delimited review files.
//!
//! Input files must carry a header row, but the exact column names are
//! configuration rather than protocol. A [`ColumnSchema`] holds the
//! configured names; [`ColumnSchema::resolve`] maps them onto positional
//! indices for one concrete file.

use csv::StringRecord;

use super::error::LoadError;

/// Default name of the column holding the review body.
pub const DEFAULT_TEXT_COLUMN: &str = "text";
/// Default name of the column holding the sentiment label.
pub const DEFAULT_LABEL_COLUMN: &str = "polarity";
/// Default name of the optional review title column.
pub const DEFAULT_TITLE_COLUMN: &str = "title";
/// Default name of the optional star rating column.
pub const DEFAULT_RATING_COLUMN: &str = "rating";
/// Default name of the optional product identifier column.
pub const DEFAULT_PRODUCT_COLUMN: &str = "product_id";
/// Default name of the optional review date column.
pub const DEFAULT_DATE_COLUMN: &str = "date";

/// Configured column names for review input files.
///
/// The text and label columns are required; a file whose header lacks either
/// fails to load. The metadata columns are optional and populate the
/// corresponding [`super::ReviewRecord`] fields only when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSchema {
    /// Name of the column holding the review body.
    pub text: String,
    /// Name of the column holding the sentiment label.
    pub label: String,
    /// Name of the optional title column.
    pub title: String,
    /// Name of the optional rating column.
    pub rating: String,
    /// Name of the optional product identifier column.
    pub product_id: String,
    /// Name of the optional date column.
    pub date: String,
}

impl Default for ColumnSchema {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT_COLUMN.to_owned(),
            label: DEFAULT_LABEL_COLUMN.to_owned(),
            title: DEFAULT_TITLE_COLUMN.to_owned(),
            rating: DEFAULT_RATING_COLUMN.to_owned(),
            product_id: DEFAULT_PRODUCT_COLUMN.to_owned(),
            date: DEFAULT_DATE_COLUMN.to_owned(),
        }
    }
}

/// Positional column indices resolved for one concrete file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ResolvedColumns {
    pub(crate) text: usize,
    pub(crate) label: usize,
    pub(crate) title: Option<usize>,
    pub(crate) rating: Option<usize>,
    pub(crate) product_id: Option<usize>,
    pub(crate) date: Option<usize>,
}

impl ColumnSchema {
    /// Resolves the configured names against a header row.
    ///
    /// Header comparison is exact. Metadata columns absent from the header
    /// resolve to `None` rather than failing.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::MissingColumn`] when the text or label column is
    /// not present in the header.
    pub(crate) fn resolve(
        &self,
        headers: &StringRecord,
        path: &str,
    ) -> Result<ResolvedColumns, LoadError> {
        let position = |name: &str| headers.iter().position(|header| header.trim() == name);

        let text = position(&self.text).ok_or_else(|| LoadError::MissingColumn {
            path: path.to_owned(),
            column: self.text.clone(),
        })?;
        let label = position(&self.label).ok_or_else(|| LoadError::MissingColumn {
            path: path.to_owned(),
            column: self.label.clone(),
        })?;

        Ok(ResolvedColumns {
            text,
            label,
            title: position(&self.title),
            rating: position(&self.rating),
            product_id: position(&self.product_id),
            date: position(&self.date),
        })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn headers(names: &[&str]) -> StringRecord {
        StringRecord::from(names.to_vec())
    }

    #[rstest]
    fn resolve_finds_required_and_optional_columns() {
        let schema = ColumnSchema::default();
        let resolved = schema
            .resolve(&headers(&["polarity", "title", "text"]), "a.csv")
            .expect("should resolve default schema");

        assert_eq!(resolved.text, 2);
        assert_eq!(resolved.label, 0);
        assert_eq!(resolved.title, Some(1));
        assert_eq!(resolved.rating, None);
        assert_eq!(resolved.product_id, None);
        assert_eq!(resolved.date, None);
    }

    #[rstest]
    fn resolve_trims_header_whitespace() {
        let schema = ColumnSchema::default();
        let resolved = schema
            .resolve(&headers(&[" polarity ", "text"]), "a.csv")
            .expect("should tolerate padded headers");

        assert_eq!(resolved.label, 0);
        assert_eq!(resolved.text, 1);
    }

    #[rstest]
    #[case(&["title", "text"], "polarity")]
    #[case(&["polarity", "title"], "text")]
    fn resolve_reports_the_missing_column(#[case] names: &[&str], #[case] missing: &str) {
        let schema = ColumnSchema::default();
        let error = schema
            .resolve(&headers(names), "b.csv")
            .expect_err("should fail without required column");

        assert_eq!(
            error,
            LoadError::MissingColumn {
                path: "b.csv".to_owned(),
                column: missing.to_owned(),
            }
        );
    }

    #[rstest]
    fn resolve_honours_configured_names() {
        let schema = ColumnSchema {
            text: "review_body".to_owned(),
            label: "stars_bucket".to_owned(),
            ..ColumnSchema::default()
        };
        let resolved = schema
            .resolve(&headers(&["stars_bucket", "review_body", "date"]), "c.csv")
            .expect("should resolve custom names");

        assert_eq!(resolved.label, 0);
        assert_eq!(resolved.text, 1);
        assert_eq!(resolved.date, Some(2));
    }
}
