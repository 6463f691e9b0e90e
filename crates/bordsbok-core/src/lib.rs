pub mod error;
pub mod export;
pub mod extraction;
pub mod model;
pub mod parsing;

use tracing::info;

use error::BordsbokError;
use model::{OutputRow, Sheet, Workbook};

/// Main API entry point: convert a seating-card report workbook into
/// one row per guest.
///
/// Reads xlsx, xlsm, xlsb, xls or ods bytes. The only failure is a workbook
/// that cannot be read at all; a readable workbook without any booking
/// blocks gives an empty vector.
pub fn convert_bytes(bytes: &[u8]) -> Result<Vec<OutputRow>, BordsbokError> {
    let workbook = extraction::workbook::read_workbook(bytes)?;
    Ok(convert(&workbook))
}

/// Convert an already materialized workbook. Sheets are processed in order.
pub fn convert(workbook: &Workbook) -> Vec<OutputRow> {
    let rows: Vec<OutputRow> = workbook.sheets.iter().flat_map(convert_sheet).collect();
    info!(
        sheets = workbook.sheets.len(),
        rows = rows.len(),
        "converted workbook"
    );
    rows
}

pub fn convert_sheet(sheet: &Sheet) -> Vec<OutputRow> {
    parsing::parse_sheet(sheet)
}
