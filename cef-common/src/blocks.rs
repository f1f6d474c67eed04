//! Block splitter
//!
//! An uploaded sheet holds one table per evaluation period, stacked
//! vertically. Each period starts with a repeated header row carrying the
//! `Full Name` marker; everything up to the next marker belongs to it.

use serde::Serialize;

use crate::workbook::{Cell, RawTable};

/// Marker cell (compared case-insensitively after trimming)
pub const SENTINEL: &str = "full name";

/// Identity column holding the participant name
pub const IDENTITY_COLUMN: &str = "Full Name";

/// One evaluation period's participant table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    /// Ordinal label, `Block 1` for the first block in the sheet
    pub name: String,
    /// Promoted header row, trimmed
    pub columns: Vec<String>,
    /// Data rows, each exactly `columns.len()` cells wide
    pub rows: Vec<Vec<Cell>>,
}

impl Block {
    /// Position of a column by exact header name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell at `row` under the named column
    pub fn cell(&self, row: usize, column: &str) -> Option<&Cell> {
        let idx = self.column_index(column)?;
        self.rows.get(row).and_then(|r| r.get(idx))
    }
}

/// Label for the block at 1-based position `ordinal`
pub fn block_name(ordinal: usize) -> String {
    format!("Block {}", ordinal)
}

/// True when any cell in the row is the block marker
pub fn is_header_row(row: &[Cell]) -> bool {
    row.iter()
        .any(|cell| cell.display_text().eq_ignore_ascii_case(SENTINEL))
}

/// Slice a raw sheet into blocks at every header row
///
/// Rows before the first header row belong to no block. A sheet without any
/// header row yields no blocks.
pub fn split_blocks(raw: &RawTable) -> Vec<Block> {
    let header_rows: Vec<usize> = raw
        .iter()
        .enumerate()
        .filter(|(_, row)| is_header_row(row))
        .map(|(i, _)| i)
        .collect();

    header_rows
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = header_rows.get(i + 1).copied().unwrap_or(raw.len());
            build_block(block_name(i + 1), &raw[start..end])
        })
        .collect()
}

fn build_block(name: String, slice: &[Vec<Cell>]) -> Block {
    let columns: Vec<String> = slice[0].iter().map(Cell::display_text).collect();
    let width = columns.len();

    let rows = slice[1..]
        .iter()
        .filter(|row| !row.iter().all(Cell::is_empty))
        .map(|row| {
            let mut cells: Vec<Cell> = row.iter().take(width).cloned().collect();
            cells.resize(width, Cell::Empty);
            cells
        })
        .collect();

    Block { name, columns, rows }
}
