//! Workbook builders for tests

use std::path::Path;

use rust_xlsxwriter::Workbook;

/// Write `rows` to the first sheet of a new workbook; empty strings stay blank
pub fn write_workbook(path: &Path, rows: &[&[&str]]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, text) in row.iter().enumerate() {
            if text.is_empty() {
                continue;
            }
            worksheet
                .write_string(row_idx as u32, col_idx as u16, *text)
                .unwrap();
        }
    }

    workbook.save(path).unwrap();
}
