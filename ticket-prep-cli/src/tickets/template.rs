//! Write a blank input workbook

use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Workbook};

use super::reader::columns;

/// File name `template` writes by default; never picked up as run input
pub const TEMPLATE_FILE_NAME: &str = "tickets_template.xlsx";

/// Header row of the template, with column widths
const TEMPLATE_COLUMNS: [(&str, f64); 3] = [
    (columns::TITLE, 40.0),
    (columns::DESCRIPTION, 80.0),
    (columns::SEVERITY, 12.0),
];

/// Write a workbook containing only the header row
pub fn write_template_excel(path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Tickets")?;

    let header = Format::new().set_bold();
    for (col, (name, width)) in TEMPLATE_COLUMNS.iter().enumerate() {
        let col = col as u16;
        worksheet.write_string_with_format(0, col, *name, &header)?;
        worksheet.set_column_width(col, *width)?;
    }
    worksheet.set_freeze_panes(1, 0)?;

    workbook
        .save(path)
        .with_context(|| format!("Failed to save Excel file: {}", path.display()))?;

    Ok(())
}
