//! Spreadsheet decoding tests against workbooks built in memory

use base64::{engine::general_purpose::STANDARD, Engine as _};
use cef_common::upload::parse_contents;
use cef_common::workbook::{read_spreadsheet, Cell};
use cef_common::Session;
use rust_xlsxwriter::{Workbook, XlsxError};

const XLSX_MIME: &str = "data:application/vnd.openxmlformats-officedocument.spreadsheetml.sheet;base64";

/// Two blocks whose marker cells sit at B3 and B6, under a title in A1
fn offset_workbook() -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    {
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "CEF export")?;

        sheet.write_string(2, 1, "Full Name")?;
        sheet.write_string(2, 2, "Q1")?;
        sheet.write_string(2, 3, "Q2")?;
        sheet.write_string(3, 1, "Alice")?;
        sheet.write_string(3, 2, "YES")?;
        sheet.write_string(3, 3, "Neither YES or NO")?;

        sheet.write_string(5, 1, "FULL NAME")?;
        sheet.write_string(5, 2, "Q1")?;
        sheet.write_string(5, 3, "Q2")?;
        sheet.write_string(6, 1, "Alice")?;
        sheet.write_string(6, 2, "NO")?;
        sheet.write_number(6, 3, 1.0)?;
    }
    workbook.save_to_buffer()
}

#[test]
fn test_xlsx_blocks_found_away_from_a1() {
    let bytes = offset_workbook().unwrap();
    let raw = read_spreadsheet(bytes).unwrap();

    assert_eq!(raw[0][0], Cell::Text("CEF export".into()));

    let session = Session::from_raw_table(&raw);
    assert_eq!(session.block_labels(), vec!["Block 1", "Block 2"]);
    assert_eq!(session.participants(), &["Alice".to_string()]);

    let (block, row) = session.person("Block 1", "Alice").unwrap();
    assert_eq!(block.question_columns, vec!["Q1", "Q2"]);
    assert_eq!(row.scores, vec![Some(1.0), Some(0.5)]);

    // Numeric cells are not answers
    let (_, row) = session.person("Block 2", "Alice").unwrap();
    assert_eq!(row.scores, vec![Some(0.0), None]);
}

#[test]
fn test_xlsx_data_url_decodes_by_extension() {
    let bytes = offset_workbook().unwrap();
    let contents = format!("{},{}", XLSX_MIME, STANDARD.encode(bytes));

    let raw = parse_contents(&contents, Some("cef.xlsx")).unwrap();
    let session = Session::from_raw_table(&raw);

    assert_eq!(session.blocks().len(), 2);
}
