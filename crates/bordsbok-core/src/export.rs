use std::fmt;
use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet};

use crate::error::BordsbokError;
use crate::model::OutputRow;

pub const EXPORT_SHEET_NAME: &str = "Omstrukturerad";

/// Column headers of the exported sheet, in output column order.
pub const EXPORT_COLUMNS: [&str; 5] = ["Namn", "antal", "artiklar", "bord", "tid"];

/// File name for an export produced on `date`, e.g.
/// `omstrukturerad_bordsbokning_2024-05-17.xlsx`.
pub fn default_output_filename(date: impl fmt::Display) -> String {
    format!("omstrukturerad_bordsbokning_{date}.xlsx")
}

/// Write rows to an in-memory xlsx workbook.
pub fn write_xlsx(rows: &[OutputRow]) -> Result<Vec<u8>, BordsbokError> {
    let mut workbook = build_workbook(rows)?;
    workbook
        .save_to_buffer()
        .map_err(|e| BordsbokError::Export(format!("failed to serialize workbook: {e}")))
}

/// Write rows to an xlsx file at `path`.
pub fn save_xlsx(rows: &[OutputRow], path: &Path) -> Result<(), BordsbokError> {
    let mut workbook = build_workbook(rows)?;
    workbook
        .save(path)
        .map_err(|e| BordsbokError::Export(format!("failed to save {}: {e}", path.display())))
}

fn build_workbook(rows: &[OutputRow]) -> Result<Workbook, BordsbokError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(EXPORT_SHEET_NAME)
        .map_err(|e| BordsbokError::Export(format!("failed to set worksheet name: {e}")))?;

    write_rows(worksheet, rows)
        .map_err(|e| BordsbokError::Export(format!("failed to write rows: {e}")))?;

    Ok(workbook)
}

fn write_rows(
    worksheet: &mut Worksheet,
    rows: &[OutputRow],
) -> Result<(), rust_xlsxwriter::XlsxError> {
    let header_format = Format::new().set_bold();
    for (col, title) in EXPORT_COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *title, &header_format)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        worksheet.write_string(r, 0, &row.name)?;
        worksheet.write_number(r, 1, row.count)?;
        worksheet.write_string(r, 2, &row.articles)?;
        worksheet.write_string(r, 3, &row.table)?;
        worksheet.write_string(r, 4, row.time_slot.as_str())?;
    }

    Ok(())
}
