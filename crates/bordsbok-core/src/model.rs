use serde::{Deserialize, Serialize};
use std::fmt;

/// A workbook materialized into plain text grids, in workbook order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

/// A 2-D grid of trimmed cell texts, row-major and 0-based.
///
/// Rows may be ragged; any position outside the stored cells reads as the
/// empty string, same as a blank cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sheet {
    pub name: String,
    rows: Vec<Vec<String>>,
}

impl Sheet {
    /// Build a sheet from raw cell texts. Every cell is trimmed.
    pub fn from_rows<R, C, S>(name: impl Into<String>, rows: R) -> Sheet
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| cell.as_ref().trim().to_string())
                    .collect()
            })
            .collect();
        Sheet {
            name: name.into(),
            rows,
        }
    }

    /// Text of the cell at (row, col), or `""` when blank or out of range.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of stored cells in the given row.
    pub fn row_width(&self, row: usize) -> usize {
        self.rows.get(row).map(Vec::len).unwrap_or(0)
    }
}

/// Position of an `Antal` cell; the matching `Artikel` cell is at `col + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderPos {
    pub row: usize,
    pub col: usize,
}

/// A fully resolved booking block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub header: HeaderPos,
    pub table: String,
    pub guest: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedArticle {
    pub article: String,
    pub quantity: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeSlot {
    /// Served during the intermission.
    Paus,
    /// Served before the show.
    Innan,
}

impl TimeSlot {
    /// Classify a table label: any label mentioning "paus" is an intermission table.
    pub fn from_table_label(label: &str) -> TimeSlot {
        if label.to_lowercase().contains("paus") {
            TimeSlot::Paus
        } else {
            TimeSlot::Innan
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeSlot::Paus => "paus",
            TimeSlot::Innan => "innan",
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One placement card: a single guest with everything ordered for the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRow {
    pub name: String,
    pub count: u32,
    pub articles: String,
    pub table: String,
    pub time_slot: TimeSlot,
}
