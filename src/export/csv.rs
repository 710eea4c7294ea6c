//! CSV serialisation of the export row projection.

use super::error::ExportError;
use super::model::{EXPORT_HEADERS, ExportedReview};

/// Serialises reviews into CSV bytes with a header row.
///
/// An empty slice yields a file containing only the header row.
///
/// # Errors
///
/// Returns [`ExportError::Serialise`] when a record cannot be written.
pub fn csv_bytes(reviews: &[ExportedReview]) -> Result<Vec<u8>, ExportError> {
    let serialise_error = |error: csv::Error| ExportError::Serialise {
        message: error.to_string(),
    };

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(EXPORT_HEADERS).map_err(serialise_error)?;
    for review in reviews {
        writer
            .write_record([
                &review.title,
                &review.text,
                &review.sentiment,
                &review.rating,
                &review.product_id,
                &review.date,
            ])
            .map_err(serialise_error)?;
    }

    writer
        .into_inner()
        .map_err(|error| ExportError::Serialise {
            message: error.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::corpus::Sentiment;
    use crate::corpus::test_support::{minimal_review, titled_review};

    use super::*;

    fn as_text(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).expect("CSV output should be UTF-8")
    }

    #[rstest]
    fn empty_export_contains_only_the_header_row() {
        let text = as_text(csv_bytes(&[]).expect("should serialise empty export"));
        assert_eq!(text, "title,text,sentiment,rating,product_id,date\n");
    }

    #[rstest]
    fn rows_follow_the_header_in_record_order() {
        let reviews = vec![
            ExportedReview::from(&titled_review("Great", "great product", Sentiment::Positive)),
            ExportedReview::from(&minimal_review("terrible", Sentiment::Negative)),
        ];
        let text = as_text(csv_bytes(&reviews).expect("should serialise rows"));

        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines.get(1), Some(&"Great,great product,positive,,,"));
        assert_eq!(lines.get(2), Some(&",terrible,negative,,,"));
    }
}
