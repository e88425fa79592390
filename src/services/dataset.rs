use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use tracing::debug;

use crate::error::{ConvertError, Result};
use crate::model::row::SourceRow;
use crate::services::encoding;

/// A loaded sheet: header names plus raw cell text per data row.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn missing_columns(&self, required: &[&str]) -> Vec<String> {
        required
            .iter()
            .filter(|name| !self.columns.iter().any(|c| c.as_str() == **name))
            .map(|name| name.to_string())
            .collect()
    }

    pub fn require_columns(&self, required: &[&str]) -> Result<()> {
        let missing = self.missing_columns(required);
        if missing.is_empty() {
            return Ok(());
        }

        Err(ConvertError::MissingColumns {
            missing,
            available: self.columns.clone(),
        })
    }

    /// Rows in source order. A duplicated header resolves to its first column.
    pub fn source_rows(&self) -> Vec<SourceRow> {
        let mut index: HashMap<&str, usize> = HashMap::with_capacity(self.columns.len());
        for (i, name) in self.columns.iter().enumerate() {
            index.entry(name.as_str()).or_insert(i);
        }

        self.rows
            .iter()
            .map(|cells| {
                SourceRow::from_columns(|name| {
                    index
                        .get(name)
                        .and_then(|&i| cells.get(i))
                        .cloned()
                        .flatten()
                })
            })
            .collect()
    }
}

/// Loads the first worksheet of a workbook, or a CSV file, by extension.
pub fn load(path: &Path) -> Result<Dataset> {
    if !path.exists() {
        return Err(ConvertError::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }

    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "csv" => load_csv(path),
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => load_workbook(path),
        _ => Err(read_error(
            path,
            format!("unsupported file extension '{ext}'"),
        )),
    }
}

fn load_workbook(path: &Path) -> Result<Dataset> {
    let mut workbook = open_workbook_auto(path).map_err(|e| read_error(path, e))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| read_error(path, "workbook has no worksheets"))?
        .map_err(|e| read_error(path, e))?;

    let mut rows = range.rows();

    let columns: Vec<String> = match rows.next() {
        Some(header) => header.iter().map(header_text).collect(),
        None => Vec::new(),
    };

    // Blank rows inside the used range are skipped, like blank CSV lines.
    let rows: Vec<Vec<Option<String>>> = rows
        .map(|row| row.iter().map(cell_text).collect::<Vec<_>>())
        .filter(|cells| !is_blank(cells))
        .collect();

    debug!(path = %path.display(), columns = columns.len(), rows = rows.len(), "read worksheet");

    Ok(Dataset { columns, rows })
}

fn load_csv(path: &Path) -> Result<Dataset> {
    let bytes = fs::read(path).map_err(|e| read_error(path, e))?;
    let decoded = encoding::decode(&bytes).map_err(|e| read_error(path, e))?;

    debug!(
        path = %path.display(),
        encoding = decoded.encoding,
        confidence = decoded.confidence,
        "decoded csv"
    );

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(decoded.text.as_bytes());

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| read_error(path, e))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| read_error(path, e))?;
        let cells: Vec<Option<String>> = record
            .iter()
            .map(|field| {
                if field.is_empty() {
                    None
                } else {
                    Some(field.to_string())
                }
            })
            .collect();

        if !is_blank(&cells) {
            rows.push(cells);
        }
    }

    Ok(Dataset { columns, rows })
}

fn is_blank(cells: &[Option<String>]) -> bool {
    cells
        .iter()
        .all(|c| c.as_deref().map_or(true, str::is_empty))
}

fn header_text(cell: &Data) -> String {
    cell_text(cell).unwrap_or_default().trim().to_string()
}

/// Cell text as a reader sees it. Whole floats render without a fraction
/// (`1.0` -> "1").
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) => Some(s.clone()),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => Some(f.to_string()),
        Data::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

fn read_error(path: &Path, err: impl fmt::Display) -> ConvertError {
    ConvertError::DatasetRead {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}
