pub mod convert;
pub mod preview;

/// Shown when a readable workbook contains no booking blocks.
pub const NO_ROWS_HINT: &str = "no rows could be extracted. Check that the file has the same \
layout as the seating-card report (\"Bord:\", guest name, \"X personer\", Antal/Artikel).";
