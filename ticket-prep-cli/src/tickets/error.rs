//! Errors that end a run early

use std::path::PathBuf;

use thiserror::Error;

/// Why a run stopped before processing any rows, or failed to persist them
#[derive(Debug, Error)]
pub enum RunError {
    /// No candidate spreadsheet in the scanned directory
    #[error("No Excel files found in {}", dir.display())]
    DiscoveryEmpty { dir: PathBuf },

    /// Required header columns are absent
    #[error("Missing required columns: {}", missing.join(", "))]
    SchemaInvalid { missing: Vec<String> },

    /// The spreadsheet (or the directory holding it) could not be read
    #[error("Error reading {}: {reason}", path.display())]
    ReadFailure { path: PathBuf, reason: String },

    /// The results file could not be written
    #[error("Failed to write results to {}", path.display())]
    ResultsWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RunError {
    /// Whether the run should end quietly (exit status 0) after reporting this error
    pub fn is_clean_exit(&self) -> bool {
        !matches!(self, RunError::ResultsWrite { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_invalid_lists_missing_columns() {
        let err = RunError::SchemaInvalid {
            missing: vec!["Title".to_string(), "Description".to_string()],
        };
        assert_eq!(err.to_string(), "Missing required columns: Title, Description");
        assert!(err.is_clean_exit());
    }

    #[test]
    fn test_results_write_is_not_clean_exit() {
        let err = RunError::ResultsWrite {
            path: PathBuf::from("qcli_results.json"),
            source: std::io::Error::other("disk full"),
        };
        assert!(!err.is_clean_exit());
    }
}
