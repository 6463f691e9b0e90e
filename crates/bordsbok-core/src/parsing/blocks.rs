use tracing::debug;

use crate::model::{Block, HeaderPos, Sheet};
use crate::parsing::anchors::{is_guest_name, is_header_pair, is_persons_line, is_table_label};

/// Search upward from `start_row` (exclusive) in `col` for the nearest row
/// whose cell satisfies `predicate`.
///
/// Blank cells are stepped over. A non-blank cell matching `stop` ends the
/// search without a result; `stop` is checked before `predicate`.
pub fn find_nearest_above<P, S>(
    sheet: &Sheet,
    start_row: usize,
    col: usize,
    predicate: P,
    stop: S,
) -> Option<usize>
where
    P: Fn(&str) -> bool,
    S: Fn(&str) -> bool,
{
    for row in (0..start_row).rev() {
        let text = sheet.cell(row, col);
        if text.is_empty() {
            continue;
        }
        if stop(text) {
            return None;
        }
        if predicate(text) {
            return Some(row);
        }
    }
    None
}

fn never(_: &str) -> bool {
    false
}

/// Resolve the booking block governing the header pair at `header`.
///
/// Walks upward from the header: persons line, then table label, then the
/// guest name strictly between those two rows. Returns `None` as soon as any
/// of the three anchors is missing.
pub fn resolve_block(sheet: &Sheet, header: HeaderPos) -> Option<Block> {
    let Some(persons_row) =
        find_nearest_above(sheet, header.row, header.col, is_persons_line, never)
    else {
        debug!(sheet = %sheet.name, row = header.row, col = header.col, "no persons line above header");
        return None;
    };

    let Some(table_row) = find_nearest_above(sheet, persons_row, header.col, is_table_label, never)
    else {
        debug!(sheet = %sheet.name, row = header.row, col = header.col, "no table label above persons line");
        return None;
    };

    let Some(guest_row) =
        find_nearest_above(sheet, persons_row, header.col, is_guest_name, is_table_label)
    else {
        debug!(sheet = %sheet.name, row = header.row, col = header.col, "no guest name between table label and persons line");
        return None;
    };

    Some(Block {
        header,
        table: sheet.cell(table_row, header.col).to_string(),
        guest: sheet.cell(guest_row, header.col).to_string(),
    })
}

/// Lazy row-major scan of a sheet for resolvable booking blocks.
///
/// Every `Antal`/`Artikel` pair is resolved independently; pairs that do not
/// resolve are skipped and scanning continues with the next cell.
pub struct BlockLocator<'a> {
    sheet: &'a Sheet,
    row: usize,
    col: usize,
}

impl<'a> BlockLocator<'a> {
    pub fn new(sheet: &'a Sheet) -> Self {
        Self { sheet, row: 0, col: 0 }
    }
}

impl Iterator for BlockLocator<'_> {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        while self.row < self.sheet.height() {
            if self.col + 1 >= self.sheet.row_width(self.row) {
                self.row += 1;
                self.col = 0;
                continue;
            }

            let header = HeaderPos {
                row: self.row,
                col: self.col,
            };
            self.col += 1;

            if is_header_pair(self.sheet, header.row, header.col) {
                if let Some(block) = resolve_block(self.sheet, header) {
                    return Some(block);
                }
            }
        }
        None
    }
}
