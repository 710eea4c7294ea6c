//! Excel workbook serialisation via `rust_xlsxwriter`.
//!
//! The workbook is produced entirely in memory; callers hand the bytes to
//! the artefact writer. One sheet, bold header row, one row per record.

use rust_xlsxwriter::{Format, Workbook, XlsxError};

use super::error::ExportError;
use super::model::{EXPORT_HEADERS, ExportedReview};

/// Serialises reviews into the bytes of a single-sheet `.xlsx` workbook.
///
/// An empty slice still yields a valid workbook containing only the header
/// row.
///
/// # Errors
///
/// Returns [`ExportError::Serialise`] when the workbook cannot be built.
pub fn workbook_bytes(reviews: &[ExportedReview]) -> Result<Vec<u8>, ExportError> {
    build_workbook(reviews).map_err(|error| ExportError::Serialise {
        message: error.to_string(),
    })
}

fn build_workbook(reviews: &[ExportedReview]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("reviews")?;

    let header_format = Format::new().set_bold();
    for (column, header) in (0u16..).zip(EXPORT_HEADERS) {
        worksheet.write_string_with_format(0, column, header, &header_format)?;
    }

    let mut row = 1u32;
    for review in reviews {
        worksheet.write_string(row, 0, &review.title)?;
        worksheet.write_string(row, 1, &review.text)?;
        worksheet.write_string(row, 2, &review.sentiment)?;
        worksheet.write_string(row, 3, &review.rating)?;
        worksheet.write_string(row, 4, &review.product_id)?;
        worksheet.write_string(row, 5, &review.date)?;
        row = row.saturating_add(1);
    }

    workbook.save_to_buffer()
}
