use std::io::Cursor;
use std::path::Path;

use calamine::{Data, Range, Reader};
use tracing::debug;

use crate::error::BordsbokError;
use crate::model::{Sheet, Workbook};

/// Read a spreadsheet into plain text grids.
///
/// The format (xlsx, xlsm, xlsb, xls, ods) is detected from the bytes. Every
/// worksheet is read, in workbook order. Any failure to open the container or
/// read a worksheet is an `InputFormat` error.
pub fn read_workbook(bytes: &[u8]) -> Result<Workbook, BordsbokError> {
    let cursor = Cursor::new(bytes);
    let mut workbook = calamine::open_workbook_auto_from_rs(cursor)
        .map_err(|e| BordsbokError::InputFormat(format!("failed to open workbook: {e}")))?;

    let mut sheets = Vec::new();
    for name in workbook.sheet_names() {
        let range = workbook.worksheet_range(&name).map_err(|e| {
            BordsbokError::InputFormat(format!("failed to read sheet '{name}': {e}"))
        })?;
        let sheet = range_to_sheet(&name, &range);
        debug!(sheet = %name, rows = sheet.height(), "read sheet");
        sheets.push(sheet);
    }

    Ok(Workbook { sheets })
}

/// Read a spreadsheet file from disk. See [`read_workbook`].
pub fn read_workbook_file(path: &Path) -> Result<Workbook, BordsbokError> {
    let bytes = std::fs::read(path)?;
    read_workbook(&bytes)
}

/// Convert a calamine range into a sheet addressed by absolute positions, so
/// row/column indices match the spreadsheet even when the used range does not
/// start at A1.
fn range_to_sheet(name: &str, range: &Range<Data>) -> Sheet {
    let (row_offset, col_offset) = match range.start() {
        Some((r, c)) => (r as usize, c as usize),
        None => (0, 0),
    };

    let leading_rows = std::iter::repeat_with(Vec::new).take(row_offset);
    let data_rows = range.rows().map(|cells| {
        std::iter::repeat(String::new())
            .take(col_offset)
            .chain(cells.iter().map(cell_text))
            .collect::<Vec<String>>()
    });

    Sheet::from_rows(name, leading_rows.chain(data_rows))
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Empty => String::new(),
        _ => format!("{cell}").trim().to_string(),
    }
}
