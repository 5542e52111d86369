//! CSV row source with encoding and delimiter auto-detection.
//!
//! [`CsvRows`] reads an entire CSV input up front (headers from the first
//! record) and then exposes it row by row through
//! [`RowSource`](crate::source::RowSource). Cells are plain strings;
//! conversion into the target field's type happens on write.

use std::collections::VecDeque;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::error::{CsvResult, CsvSourceError};
use crate::record::ScanTarget;
use crate::source::RowSource;

// =============================================================================
// Encoding & Delimiter Detection
// =============================================================================

/// Detect the encoding of raw bytes using chardet, normalized to a small set
/// of canonical names.
pub fn detect_encoding(bytes: &[u8]) -> String {
    let (charset, _, _) = chardet::detect(bytes);
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        other => other.to_string(),
    }
}

/// Decode bytes to a string using the given encoding name.
///
/// Unknown encodings fall back to lossy UTF-8, so decoding never fails.
pub fn decode_bytes(bytes: &[u8], encoding: &str) -> String {
    match encoding.to_lowercase().as_str() {
        // ISO_8859_15 stands in for ISO-8859-1; the two differ in 8 code
        // points (0xA4/0xA6/0xA8/0xB4/0xB8/0xBC/0xBD/0xBE, e.g. ¤ -> €).
        "iso-8859-1" | "latin-1" | "latin1" => encoding_rs::ISO_8859_15.decode(bytes).0.into_owned(),
        "windows-1252" | "cp1252" => encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned(),
        _ => String::from_utf8_lossy(bytes).into_owned(),
    }
}

/// Detect the delimiter by counting candidate separators in the first line.
pub fn detect_delimiter(content: &str) -> u8 {
    let first_line = content.lines().next().unwrap_or("");

    let separators = [b',', b';', b'\t', b'|'];
    let mut best_sep = b',';
    let mut best_count = 0;

    for &sep in &separators {
        let count = first_line.bytes().filter(|&b| b == sep).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

// =============================================================================
// CsvRows
// =============================================================================

/// A CSV-backed row source with an explicit cursor.
///
/// Headers come from the first record and are the column names; call
/// [`advance`](CsvRows::advance) to move onto each data row before scanning.
/// Rows shorter than the header list read as empty trailing cells; extra
/// cells beyond the headers are never requested.
///
/// Correspondence is strictly positional: target *i* receives cell *i*.
/// When a column with no matching field sits in the *middle* of the header
/// list, every later target shifts left and receives the wrong column's
/// cell. Only a suffix of unmatched columns drops cleanly; keep headers
/// aligned with the record's tags (or tag every leading column) when
/// scanning through a [`StructScanner`](crate::scan::StructScanner).
#[derive(Debug)]
pub struct CsvRows {
    headers: Vec<String>,
    rows: VecDeque<StringRecord>,
    current: Option<StringRecord>,
    delimiter: u8,
    encoding: String,
}

impl CsvRows {
    /// Read a CSV file, auto-detecting encoding and delimiter.
    pub fn from_path<P: AsRef<Path>>(path: P) -> CsvResult<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// Read CSV bytes, auto-detecting encoding and delimiter.
    pub fn from_bytes(bytes: &[u8]) -> CsvResult<Self> {
        let encoding = detect_encoding(bytes);
        let content = decode_bytes(bytes, &encoding);
        let delimiter = detect_delimiter(&content);
        Self::parse(&content, delimiter, encoding)
    }

    /// Read CSV text with an explicit delimiter.
    pub fn from_text(content: &str, delimiter: u8) -> CsvResult<Self> {
        Self::parse(content, delimiter, "utf-8".to_string())
    }

    fn parse(content: &str, delimiter: u8, encoding: String) -> CsvResult<Self> {
        if content.trim().is_empty() {
            return Err(CsvSourceError::EmptyInput);
        }

        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .from_reader(content.as_bytes());

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();
        if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
            return Err(CsvSourceError::NoHeaders);
        }

        let mut rows = VecDeque::new();
        for record in reader.records() {
            let record = record?;
            // Blank lines come through as a single empty cell; skip them.
            if record.iter().all(|cell| cell.trim().is_empty()) {
                continue;
            }
            rows.push_back(record);
        }

        Ok(Self {
            headers,
            rows,
            current: None,
            delimiter,
            encoding,
        })
    }

    /// Move the cursor onto the next data row. Returns `false` when exhausted.
    pub fn advance(&mut self) -> bool {
        self.current = self.rows.pop_front();
        self.current.is_some()
    }

    /// Rows not yet visited by [`advance`](CsvRows::advance).
    pub fn rows_remaining(&self) -> usize {
        self.rows.len()
    }

    /// The delimiter in use (detected or supplied).
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// The encoding the input was decoded with.
    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    fn assign_cell(
        target: &mut ScanTarget<'_>,
        column: &str,
        raw: &str,
    ) -> CsvResult<()> {
        // Quotes are already stripped by the csv reader; only whitespace
        // needs trimming here.
        let cell = raw.trim();

        let parse_err = |message: String| CsvSourceError::Parse {
            column: column.to_string(),
            value: cell.to_string(),
            message,
        };

        if target.is::<String>() {
            target.put(cell.to_string())
        } else if target.is::<Option<String>>() {
            let value = if cell.is_empty() {
                None
            } else {
                Some(cell.to_string())
            };
            target.put(value)
        } else if target.is::<i64>() {
            target.put(cell.parse::<i64>().map_err(|e| parse_err(e.to_string()))?)
        } else if target.is::<u64>() {
            target.put(cell.parse::<u64>().map_err(|e| parse_err(e.to_string()))?)
        } else if target.is::<f64>() {
            target.put(cell.parse::<f64>().map_err(|e| parse_err(e.to_string()))?)
        } else if target.is::<bool>() {
            target.put(parse_bool(cell).ok_or_else(|| parse_err("not a boolean".to_string()))?)
        } else if target.is::<Option<i64>>() {
            let value = if cell.is_empty() {
                None
            } else {
                Some(cell.parse::<i64>().map_err(|e| parse_err(e.to_string()))?)
            };
            target.put(value)
        } else if target.is::<Option<u64>>() {
            let value = if cell.is_empty() {
                None
            } else {
                Some(cell.parse::<u64>().map_err(|e| parse_err(e.to_string()))?)
            };
            target.put(value)
        } else if target.is::<Option<f64>>() {
            let value = if cell.is_empty() {
                None
            } else {
                Some(cell.parse::<f64>().map_err(|e| parse_err(e.to_string()))?)
            };
            target.put(value)
        } else if target.is::<Option<bool>>() {
            let value = if cell.is_empty() {
                None
            } else {
                Some(parse_bool(cell).ok_or_else(|| parse_err("not a boolean".to_string()))?)
            };
            target.put(value)
        } else {
            Err(crate::error::AssignError::Unsupported { kind: "string" })
        }
        .map_err(|source| CsvSourceError::Assign {
            column: column.to_string(),
            source,
        })
    }
}

fn parse_bool(cell: &str) -> Option<bool> {
    match cell.to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" | "" => Some(false),
        _ => None,
    }
}

impl RowSource for CsvRows {
    type Error = CsvSourceError;

    fn columns(&mut self) -> CsvResult<Vec<String>> {
        Ok(self.headers.clone())
    }

    fn scan(&mut self, targets: &mut [ScanTarget<'_>]) -> CsvResult<()> {
        let row = self.current.as_ref().ok_or(CsvSourceError::NoRow)?;
        for (i, target) in targets.iter_mut().enumerate() {
            let column = self.headers.get(i).map(String::as_str).unwrap_or("");
            // Short rows read as empty trailing cells.
            let raw = row.get(i).unwrap_or("");
            Self::assign_cell(target, column, raw)?;
        }
        Ok(())
    }
}
