use regex::Regex;
use std::sync::OnceLock;

use crate::model::Sheet;

pub const QUANTITY_HEADER: &str = "Antal";
pub const ARTICLE_HEADER: &str = "Artikel";
pub const TABLE_PREFIX: &str = "Bord:";

/// True when (row, col) holds `Antal` and (row, col + 1) holds `Artikel`.
pub fn is_header_pair(sheet: &Sheet, row: usize, col: usize) -> bool {
    sheet.cell(row, col) == QUANTITY_HEADER && sheet.cell(row, col + 1) == ARTICLE_HEADER
}

/// Headcount line such as "4 personer". Whole word, any case.
pub fn is_persons_line(text: &str) -> bool {
    static PERSONS: OnceLock<Regex> = OnceLock::new();
    PERSONS
        .get_or_init(|| Regex::new(r"(?i)\bpersoner\b").expect("Hardcode regex pattern"))
        .is_match(text)
}

pub fn is_table_label(text: &str) -> bool {
    text.starts_with(TABLE_PREFIX)
}

/// Guest names are written "Efternamn, Förnamn".
pub fn is_guest_name(text: &str) -> bool {
    text.contains(',')
}
