//! CSV loading of review collections.
//!
//! Multiple input files are concatenated in argument order, so the first
//! data row of the first file becomes record zero. Each file must carry its
//! own header row; the configured [`ColumnSchema`] is resolved per file,
//! which lets files with differing column orders combine into one
//! collection.

use camino::Utf8PathBuf;
use csv::ReaderBuilder;
use tracing::debug;

use super::error::LoadError;
use super::model::{ReviewCollection, ReviewRecord, Sentiment};
use super::schema::{ColumnSchema, ResolvedColumns};

/// Loads a review collection from one or more delimited files.
///
/// # Errors
///
/// Returns [`LoadError::NoInputs`] when `paths` is empty,
/// [`LoadError::FileOpen`] when a file cannot be opened,
/// [`LoadError::MissingColumn`] when a header lacks a required column,
/// [`LoadError::Label`] when a label cell is empty or unrecognised, and
/// [`LoadError::Csv`] when the delimited reader reports a malformed row.
pub fn load_collection(
    paths: &[Utf8PathBuf],
    schema: &ColumnSchema,
) -> Result<ReviewCollection, LoadError> {
    if paths.is_empty() {
        return Err(LoadError::NoInputs);
    }

    let mut records = Vec::new();
    for path in paths {
        load_file(path, schema, &mut records)?;
    }

    debug!(records = records.len(), files = paths.len(), "corpus loaded");
    Ok(ReviewCollection::new(records, paths.to_vec()))
}

fn load_file(
    path: &Utf8PathBuf,
    schema: &ColumnSchema,
    records: &mut Vec<ReviewRecord>,
) -> Result<(), LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|error| LoadError::FileOpen {
            path: path.to_string(),
            message: error.to_string(),
        })?;

    let headers = reader.headers().map_err(|error| LoadError::Csv {
        path: path.to_string(),
        message: error.to_string(),
    })?;
    let columns = schema.resolve(headers, path.as_str())?;

    for row in reader.records() {
        let row = row.map_err(|error| LoadError::Csv {
            path: path.to_string(),
            message: error.to_string(),
        })?;
        // Header occupies line one, so data rows start at line two.
        let line = row.position().map_or(0, csv::Position::line);
        records.push(parse_row(&row, columns, path.as_str(), line)?);
    }

    Ok(())
}

fn parse_row(
    row: &csv::StringRecord,
    columns: ResolvedColumns,
    path: &str,
    line: u64,
) -> Result<ReviewRecord, LoadError> {
    let cell = |index: usize| row.get(index).unwrap_or("").trim();
    let optional_cell = |index: Option<usize>| {
        index
            .map(cell)
            .filter(|value| !value.is_empty())
            .map(ToOwned::to_owned)
    };

    let label_value = cell(columns.label);
    let sentiment = Sentiment::from_label(label_value).ok_or_else(|| LoadError::Label {
        path: path.to_owned(),
        line,
        value: label_value.to_owned(),
    })?;

    // Ratings that fail to parse are dropped rather than failing the load;
    // the rating column is advisory metadata.
    let rating = optional_cell(columns.rating).and_then(|value| value.parse::<u8>().ok());

    Ok(ReviewRecord {
        body: cell(columns.text).to_owned(),
        sentiment,
        title: optional_cell(columns.title),
        rating,
        product_id: optional_cell(columns.product_id),
        date: optional_cell(columns.date),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> Utf8PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).expect("should create fixture file");
        file.write_all(content.as_bytes())
            .expect("should write fixture file");
        Utf8PathBuf::from_path_buf(path).expect("temp path should be UTF-8")
    }

    #[rstest]
    fn load_preserves_row_count_and_order() {
        let dir = TempDir::new().expect("should create temp dir");
        let path = write_file(
            &dir,
            "reviews.csv",
            "polarity,title,text\n2,Great,great product\n1,Awful,terrible\n2,Fine,does the job\n",
        );

        let collection = load_collection(&[path.clone()], &ColumnSchema::default())
            .expect("should load well-formed file");

        assert_eq!(collection.len(), 3);
        assert_eq!(collection.sources(), &[path]);
        let bodies: Vec<_> = collection
            .records()
            .iter()
            .map(|record| record.body.as_str())
            .collect();
        assert_eq!(bodies, vec!["great product", "terrible", "does the job"]);
        assert_eq!(
            collection.records().first().map(|r| r.sentiment),
            Some(Sentiment::Positive)
        );
    }

    #[rstest]
    fn load_concatenates_files_in_argument_order() {
        let dir = TempDir::new().expect("should create temp dir");
        let first = write_file(&dir, "a.csv", "polarity,text\n2,alpha\n");
        let second = write_file(&dir, "b.csv", "polarity,text\n1,beta\n2,gamma\n");

        let collection = load_collection(&[first, second], &ColumnSchema::default())
            .expect("should concatenate files");

        let bodies: Vec<_> = collection
            .records()
            .iter()
            .map(|record| record.body.as_str())
            .collect();
        assert_eq!(bodies, vec!["alpha", "beta", "gamma"]);
    }

    #[rstest]
    fn load_populates_optional_metadata_when_present() {
        let dir = TempDir::new().expect("should create temp dir");
        let path = write_file(
            &dir,
            "meta.csv",
            "polarity,title,text,rating,product_id,date\n\
             positive,Solid,lasts for years,5,B0001,2023-04-01\n\
             negative,,broke in a week,not-a-number,,\n",
        );

        let collection =
            load_collection(&[path], &ColumnSchema::default()).expect("should load metadata");

        let first = collection.records().first().expect("first record");
        assert_eq!(first.title.as_deref(), Some("Solid"));
        assert_eq!(first.rating, Some(5));
        assert_eq!(first.product_id.as_deref(), Some("B0001"));
        assert_eq!(first.date.as_deref(), Some("2023-04-01"));

        let second = collection.records().get(1).expect("second record");
        assert_eq!(second.title, None);
        assert_eq!(second.rating, None, "unparsable rating should be dropped");
    }

    #[rstest]
    fn load_rejects_empty_input_list() {
        assert_eq!(
            load_collection(&[], &ColumnSchema::default()),
            Err(LoadError::NoInputs)
        );
    }

    #[rstest]
    fn load_reports_missing_file_with_path() {
        let path = Utf8PathBuf::from("/nonexistent/reviews.csv");
        let error = load_collection(&[path], &ColumnSchema::default())
            .expect_err("should fail for missing file");

        assert!(
            matches!(&error, LoadError::FileOpen { path, .. } if path.contains("nonexistent")),
            "expected FileOpen with path, got {error:?}"
        );
    }

    #[rstest]
    #[case("polarity,text\nneutral,meh\n", "neutral", 2)]
    #[case("polarity,text\n2,fine\n,empty label\n", "", 3)]
    fn load_reports_bad_labels_with_line_numbers(
        #[case] content: &str,
        #[case] bad_value: &str,
        #[case] bad_line: u64,
    ) {
        let dir = TempDir::new().expect("should create temp dir");
        let path = write_file(&dir, "labels.csv", content);

        let error = load_collection(&[path], &ColumnSchema::default())
            .expect_err("should reject unknown label");

        assert!(
            matches!(
                &error,
                LoadError::Label { value, line, .. } if value == bad_value && *line == bad_line
            ),
            "expected Label error for '{bad_value}' at line {bad_line}, got {error:?}"
        );
    }

    #[rstest]
    fn load_fails_when_required_column_is_missing() {
        let dir = TempDir::new().expect("should create temp dir");
        let path = write_file(&dir, "short.csv", "title,text\nGreat,great product\n");

        let error = load_collection(&[path], &ColumnSchema::default())
            .expect_err("should fail without label column");

        assert!(
            matches!(&error, LoadError::MissingColumn { column, .. } if column == "polarity"),
            "expected MissingColumn for polarity, got {error:?}"
        );
    }
}
