//! Upload transport envelope
//!
//! Browsers deliver the file as a data URL (`data:<mime>;base64,<payload>`),
//! the same shape `FileReader.readAsDataURL` produces.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::workbook::{read_table, RawTable, WorkbookFormat};
use crate::{Error, Result};

/// Decoded upload: payload bytes plus the format they should be read as
#[derive(Debug)]
pub struct DecodedUpload {
    pub format: WorkbookFormat,
    pub bytes: Vec<u8>,
}

/// Split a data URL into its prefix and base64-decoded payload
pub fn decode_envelope(contents: &str, filename: Option<&str>) -> Result<DecodedUpload> {
    let (prefix, payload) = contents
        .split_once(',')
        .ok_or_else(|| Error::Envelope("missing ',' separator".to_string()))?;

    // Base64 bodies are sometimes line-wrapped
    let payload: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = STANDARD.decode(payload)?;

    Ok(DecodedUpload {
        format: WorkbookFormat::detect(filename, prefix),
        bytes,
    })
}

/// Decode an uploaded data URL all the way to a raw table
pub fn parse_contents(contents: &str, filename: Option<&str>) -> Result<RawTable> {
    let upload = decode_envelope(contents, filename)?;
    read_table(upload.bytes, upload.format)
}
