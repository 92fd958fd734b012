//! Per-row run results and the results file

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::RunError;
use super::params::TicketParams;

/// Hand-off state of a bundle after submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// Bundle is ready for the host to execute
    PreparedForQcli,
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunStatus::PreparedForQcli => write!(f, "prepared_for_qcli"),
        }
    }
}

/// One processed row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    pub title: String,
    pub params: TicketParams,
    pub status: RunStatus,
}

/// Write all results as a pretty-printed JSON array, replacing any existing file
pub fn write_results(path: &Path, results: &[RunResult]) -> Result<(), RunError> {
    let write = || -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, results)?;
        writer.write_all(b"\n")?;
        writer.flush()
    };

    write().map_err(|source| RunError::ResultsWrite {
        path: path.to_path_buf(),
        source,
    })
}
