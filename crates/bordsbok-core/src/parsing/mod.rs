pub mod anchors;
pub mod blocks;
pub mod lines;
pub mod rows;

use tracing::debug;

use crate::model::{OutputRow, Sheet};
use blocks::BlockLocator;
use lines::aggregate_lines;
use rows::build_row;

/// Extract one output row per resolvable booking block in a sheet.
///
/// Blocks are emitted in row-major order of their `Antal`/`Artikel` header.
/// Header pairs that cannot be tied to a table label, persons line and guest
/// name are dropped.
pub fn parse_sheet(sheet: &Sheet) -> Vec<OutputRow> {
    let rows: Vec<OutputRow> = BlockLocator::new(sheet)
        .map(|block| {
            let articles = aggregate_lines(sheet, block.header);
            build_row(&block, &articles)
        })
        .collect();

    debug!(sheet = %sheet.name, rows = rows.len(), "parsed sheet");
    rows
}
