//! Raw workbook decoding
//!
//! Reads the first worksheet of an uploaded file into a rectangular-ish table
//! of [`Cell`]s with no header interpretation. Spreadsheets go through
//! `calamine`, CSV through the `csv` crate.

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use serde::Serialize;
use tracing::debug;

use crate::{Error, Result};

/// One cell of the uploaded worksheet
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl Cell {
    /// Trimmed string form used for header and marker comparisons
    ///
    /// Integral numbers print without a fractional part (`3`, not `3.0`).
    pub fn display_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.trim().to_string(),
            Cell::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", *n as i64),
            Cell::Number(n) => n.to_string(),
            Cell::Bool(b) => b.to_string(),
        }
    }

    /// Empty cells and whitespace-only text both count as empty
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => Cell::Empty,
            Data::String(s) => Cell::Text(s.clone()),
            Data::Float(f) => Cell::Number(*f),
            Data::Int(i) => Cell::Number(*i as f64),
            Data::Bool(b) => Cell::Bool(*b),
            // Dates, durations and error cells are kept as their display text
            other => Cell::Text(other.to_string()),
        }
    }
}

/// Worksheet rows in source order; rows may be ragged
pub type RawTable = Vec<Vec<Cell>>;

/// Container format of an uploaded file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkbookFormat {
    /// xlsx / xlsm / xlsb / xls / ods, decoded by calamine
    Spreadsheet,
    Csv,
}

impl WorkbookFormat {
    /// Detect the format from the filename extension, then the MIME prefix
    ///
    /// Anything unrecognised is treated as a spreadsheet.
    pub fn detect(filename: Option<&str>, mime_prefix: &str) -> Self {
        if let Some(ext) = filename
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_ascii_lowercase())
        {
            match ext.as_str() {
                "csv" => return WorkbookFormat::Csv,
                "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => return WorkbookFormat::Spreadsheet,
                _ => {}
            }
        }

        if mime_prefix.to_ascii_lowercase().contains("text/csv") {
            WorkbookFormat::Csv
        } else {
            WorkbookFormat::Spreadsheet
        }
    }
}

/// Decode raw file bytes in the given format
pub fn read_table(bytes: Vec<u8>, format: WorkbookFormat) -> Result<RawTable> {
    match format {
        WorkbookFormat::Spreadsheet => read_spreadsheet(bytes),
        WorkbookFormat::Csv => read_csv(&bytes),
    }
}

/// Read the first worksheet of an Excel/ODS workbook
pub fn read_spreadsheet(bytes: Vec<u8>) -> Result<RawTable> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(Error::EmptyWorkbook)??;

    let table: RawTable = range
        .rows()
        .map(|row| row.iter().map(Cell::from).collect())
        .collect();

    debug!(rows = table.len(), "Read worksheet");
    Ok(table)
}

/// Read a headerless CSV file
pub fn read_csv(bytes: &[u8]) -> Result<RawTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut table = RawTable::new();
    for record in reader.records() {
        let record = record?;
        table.push(record.iter().map(csv_cell).collect());
    }

    debug!(rows = table.len(), "Read CSV");
    Ok(table)
}

/// CSV carries no types; every non-empty field stays text
fn csv_cell(field: &str) -> Cell {
    if field.trim().is_empty() {
        Cell::Empty
    } else {
        Cell::Text(field.to_string())
    }
}
