//! Read ticket rows from an Excel workbook
//!
//! The first worksheet is used and its first row is the header. `Title` and
//! `Description` are required columns; `Severity` is optional.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};

use super::error::RunError;

/// Header names (matched exactly after trimming)
pub mod columns {
    pub const TITLE: &str = "Title";
    pub const DESCRIPTION: &str = "Description";
    pub const SEVERITY: &str = "Severity";
}

/// One usable spreadsheet row, as read (untrimmed)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpreadsheetRow {
    pub title: String,
    pub description: String,
    /// `None` when the column is absent or the cell is blank
    pub severity: Option<String>,
}

/// Rows kept from a workbook
#[derive(Debug, Clone)]
pub struct LoadedSheet {
    pub sheet_name: String,
    pub rows: Vec<SpreadsheetRow>,
    /// Data rows below the header, before filtering
    pub total_rows: usize,
}

impl LoadedSheet {
    /// Rows dropped for a blank title or description
    pub fn dropped_rows(&self) -> usize {
        self.total_rows - self.rows.len()
    }
}

/// Header positions resolved from the first row
#[derive(Debug)]
struct ColumnIndices {
    title: usize,
    description: usize,
    severity: Option<usize>,
}

/// Load and filter the ticket rows of `path`
pub fn read_ticket_rows<P: AsRef<Path>>(path: P) -> Result<LoadedSheet, RunError> {
    let path = path.as_ref();
    let read_failure = |reason: String| RunError::ReadFailure {
        path: path.to_path_buf(),
        reason,
    };

    let mut workbook = open_workbook_auto(path).map_err(|e| read_failure(e.to_string()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| read_failure("workbook has no sheets".to_string()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| read_failure(format!("sheet '{}': {}", sheet_name, e)))?;

    let mut rows = range.rows();
    let header: Vec<String> = rows
        .next()
        .map(|r| r.iter().map(|c| cell_text(c).trim().to_string()).collect())
        .unwrap_or_default();

    let cols = parse_header(&header)?;

    let mut kept = Vec::new();
    let mut total_rows = 0;

    for row in rows {
        total_rows += 1;

        let title = get_cell_string(row, cols.title);
        let description = get_cell_string(row, cols.description);
        if title.trim().is_empty() || description.trim().is_empty() {
            continue;
        }

        let severity = cols
            .severity
            .map(|c| get_cell_string(row, c))
            .filter(|s| !s.trim().is_empty());

        kept.push(SpreadsheetRow {
            title,
            description,
            severity,
        });
    }

    log::info!(
        "Read {} of {} rows from '{}' in {}",
        kept.len(),
        total_rows,
        sheet_name,
        path.display()
    );

    Ok(LoadedSheet {
        sheet_name,
        rows: kept,
        total_rows,
    })
}

fn parse_header(header: &[String]) -> Result<ColumnIndices, RunError> {
    let find = |name: &str| header.iter().position(|h| h == name);

    let title = find(columns::TITLE);
    let description = find(columns::DESCRIPTION);

    match (title, description) {
        (Some(title), Some(description)) => Ok(ColumnIndices {
            title,
            description,
            severity: find(columns::SEVERITY),
        }),
        _ => {
            let missing = [(columns::TITLE, title), (columns::DESCRIPTION, description)]
                .into_iter()
                .filter(|(_, idx)| idx.is_none())
                .map(|(name, _)| name.to_string())
                .collect();
            Err(RunError::SchemaInvalid { missing })
        }
    }
}

fn get_cell_string(row: &[Data], col: usize) -> String {
    row.get(col).map(cell_text).unwrap_or_default()
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            // Whole numbers come back as floats
            if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        other => other.to_string(),
    }
}
