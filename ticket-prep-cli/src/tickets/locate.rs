//! Find candidate spreadsheets in a directory

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::template::TEMPLATE_FILE_NAME;

/// Extensions accepted as ticket spreadsheets (compared case-insensitively)
pub const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xls"];

/// Prefix office suites use for lock files next to an open workbook
const LOCK_FILE_PREFIX: char = '~';

/// List spreadsheet files in `dir`, sorted by file name
///
/// Lock files and the blank template written by `template` are skipped.
/// An empty result is not an error.
pub fn locate_spreadsheets<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && is_spreadsheet(p))
        .collect();

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    log::debug!("Found {} spreadsheet(s) in {}", files.len(), dir.display());
    Ok(files)
}

/// Pick the file a run will use from a sorted candidate list
pub fn select_spreadsheet(candidates: &[PathBuf]) -> Option<&PathBuf> {
    candidates.first()
}

fn is_spreadsheet(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    if name.starts_with(LOCK_FILE_PREFIX) || name.eq_ignore_ascii_case(TEMPLATE_FILE_NAME) {
        return false;
    }

    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| {
            SPREADSHEET_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}
