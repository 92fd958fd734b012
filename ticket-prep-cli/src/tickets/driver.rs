//! Run a full preparation pass: discover, select, load, process, finalize

use std::path::PathBuf;

use colored::*;

use super::action::TicketAction;
use super::error::RunError;
use super::locate::{locate_spreadsheets, select_spreadsheet};
use super::params::build_ticket_params;
use super::profile::TicketProfile;
use super::reader::read_ticket_rows;
use super::results::{RunResult, write_results};

/// Characters of the title shown on each progress line
const TITLE_PREVIEW_CHARS: usize = 50;

/// Inputs for one run
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Directory scanned for spreadsheets
    pub dir: PathBuf,
    /// Use this file instead of scanning `dir`
    pub file: Option<PathBuf>,
    /// Results file; `None` disables persistence
    pub results_path: Option<PathBuf>,
}

/// What a completed run produced
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub source: PathBuf,
    pub results: Vec<RunResult>,
    pub dropped_rows: usize,
    pub results_path: Option<PathBuf>,
}

/// Execute the pipeline once
///
/// Every error returned ends the run before any results file is touched,
/// except `ResultsWrite`, which happens after all rows were submitted.
pub fn run_tickets(
    options: &RunOptions,
    profile: &TicketProfile,
    action: &mut dyn TicketAction,
) -> Result<RunSummary, RunError> {
    let source = match &options.file {
        Some(file) => file.clone(),
        None => discover(options)?,
    };

    println!("Using: {}", display_name(&source).bright_green());

    let sheet = read_ticket_rows(&source)?;
    let total = sheet.rows.len();
    let dropped_rows = sheet.dropped_rows();

    println!(
        "Found {} valid tickets in {} (sheet '{}')",
        total.to_string().bold(),
        display_name(&source),
        sheet.sheet_name
    );
    if dropped_rows > 0 {
        log::info!("Skipped {} rows with blank Title or Description", dropped_rows);
    }

    let mut results = Vec::with_capacity(total);
    for (idx, row) in sheet.rows.iter().enumerate() {
        let params = build_ticket_params(row, profile);

        println!();
        println!(
            "Ticket {}/{}: {}",
            idx + 1,
            total,
            title_preview(&params.title).bright_white()
        );

        let status = action.submit(&params);
        log::debug!("Row {} submitted with status {}", idx + 1, status);

        results.push(RunResult {
            title: params.title.clone(),
            params,
            status,
        });
    }

    if let Some(path) = &options.results_path {
        write_results(path, &results)?;
        log::info!("Wrote {} results to {}", results.len(), path.display());
    }

    Ok(RunSummary {
        source,
        results,
        dropped_rows,
        results_path: options.results_path.clone(),
    })
}

fn discover(options: &RunOptions) -> Result<PathBuf, RunError> {
    let candidates = locate_spreadsheets(&options.dir).map_err(|e| RunError::ReadFailure {
        path: options.dir.clone(),
        reason: format!("{:#}", e),
    })?;

    if candidates.len() > 1 {
        log::info!(
            "{} spreadsheets found, using the first by name",
            candidates.len()
        );
    }

    select_spreadsheet(&candidates)
        .cloned()
        .ok_or_else(|| RunError::DiscoveryEmpty {
            dir: options.dir.clone(),
        })
}

/// Title cut to the preview width, with an ellipsis when shortened
pub fn title_preview(title: &str) -> String {
    let mut chars = title.chars();
    let preview: String = chars.by_ref().take(TITLE_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", preview)
    } else {
        preview
    }
}

fn display_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tickets::fixtures::write_workbook;
    use crate::tickets::params::TicketParams;
    use crate::tickets::results::RunStatus;
    use crate::tickets::template::TEMPLATE_FILE_NAME;
    use tempfile::TempDir;

    #[derive(Default)]
    struct Recorder {
        submitted: Vec<TicketParams>,
    }

    impl TicketAction for Recorder {
        fn submit(&mut self, params: &TicketParams) -> RunStatus {
            self.submitted.push(params.clone());
            RunStatus::PreparedForQcli
        }
    }

    fn options(dir: &TempDir, persist: bool) -> RunOptions {
        RunOptions {
            dir: dir.path().to_path_buf(),
            file: None,
            results_path: persist.then(|| dir.path().join("qcli_results.json")),
        }
    }

    #[test]
    fn test_run_processes_valid_rows() {
        let dir = TempDir::new().unwrap();
        write_workbook(
            &dir.path().join("tickets.xlsx"),
            &[
                &["Title", "Description", "Severity"],
                &["A", "B", "SEV_2"],
                &["", "C", ""],
            ],
        );

        let mut recorder = Recorder::default();
        let summary =
            run_tickets(&options(&dir, true), &TicketProfile::default(), &mut recorder).unwrap();

        assert_eq!(summary.results.len(), 1);
        assert_eq!(summary.dropped_rows, 1);
        assert_eq!(recorder.submitted.len(), 1);

        let params = &recorder.submitted[0];
        assert_eq!(params.title, "A");
        assert_eq!(params.description, "B");
        assert_eq!(params.severity, "SEV_2");
        assert_eq!(params.assigned_group, "CTFin Analytics Controllership");
        assert_eq!(params.categorization, TicketProfile::default().categorization);

        let written = std::fs::read_to_string(dir.path().join("qcli_results.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value[0]["title"], "A");
        assert_eq!(value[0]["status"], "prepared_for_qcli");
        assert_eq!(value[0]["params"]["assignedGroup"], "CTFin Analytics Controllership");
        assert_eq!(value.as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_run_without_persistence_writes_nothing() {
        let dir = TempDir::new().unwrap();
        write_workbook(
            &dir.path().join("tickets.xlsx"),
            &[&["Title", "Description"], &["A", "B"], &["C", "D"]],
        );

        let mut recorder = Recorder::default();
        let summary =
            run_tickets(&options(&dir, false), &TicketProfile::default(), &mut recorder).unwrap();

        assert_eq!(summary.results.len(), 2);
        assert!(summary.results.iter().all(|r| r.params.severity == "SEV_4"));
        assert_eq!(summary.results[1].title, "C");
        assert!(summary.results_path.is_none());
        assert!(!dir.path().join("qcli_results.json").exists());
    }

    #[test]
    fn test_run_empty_dir_reports_nothing_found() {
        let dir = TempDir::new().unwrap();
        let mut recorder = Recorder::default();

        let err = run_tickets(&options(&dir, true), &TicketProfile::default(), &mut recorder)
            .unwrap_err();

        assert!(matches!(err, RunError::DiscoveryEmpty { .. }));
        assert!(err.is_clean_exit());
        assert!(recorder.submitted.is_empty());
        assert!(!dir.path().join("qcli_results.json").exists());
    }

    #[test]
    fn test_run_schema_invalid_processes_nothing() {
        let dir = TempDir::new().unwrap();
        write_workbook(
            &dir.path().join("tickets.xlsx"),
            &[&["Title", "Severity"], &["A", "SEV_1"]],
        );

        let mut recorder = Recorder::default();
        let err = run_tickets(&options(&dir, true), &TicketProfile::default(), &mut recorder)
            .unwrap_err();

        match err {
            RunError::SchemaInvalid { missing } => assert_eq!(missing, vec!["Description"]),
            other => panic!("expected SchemaInvalid, got {:?}", other),
        }
        assert!(recorder.submitted.is_empty());
        assert!(!dir.path().join("qcli_results.json").exists());
    }

    #[test]
    fn test_run_selects_first_file_by_name() {
        let dir = TempDir::new().unwrap();
        write_workbook(
            &dir.path().join("b_tickets.xlsx"),
            &[&["Title", "Description"], &["from b", "x"]],
        );
        write_workbook(
            &dir.path().join("a_tickets.xlsx"),
            &[&["Title", "Description"], &["from a", "x"]],
        );

        let mut recorder = Recorder::default();
        let summary =
            run_tickets(&options(&dir, false), &TicketProfile::default(), &mut recorder).unwrap();

        assert_eq!(summary.source.file_name().unwrap(), "a_tickets.xlsx");
        assert_eq!(summary.results[0].title, "from a");
    }

    #[test]
    fn test_run_ignores_generated_template() {
        let dir = TempDir::new().unwrap();
        crate::tickets::write_template_excel(&dir.path().join(TEMPLATE_FILE_NAME)).unwrap();
        write_workbook(
            &dir.path().join("urgent.xlsx"),
            &[&["Title", "Description"], &["Outage", "Report is down"]],
        );

        let mut recorder = Recorder::default();
        let summary =
            run_tickets(&options(&dir, true), &TicketProfile::default(), &mut recorder).unwrap();

        assert_eq!(summary.source.file_name().unwrap(), "urgent.xlsx");
        assert_eq!(summary.results.len(), 1);
        assert_eq!(recorder.submitted[0].title, "Outage");
    }

    #[test]
    fn test_explicit_file_skips_discovery() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("elsewhere.xlsx");
        write_workbook(&file, &[&["Title", "Description"], &["X", "Y"]]);

        let opts = RunOptions {
            dir: dir.path().join("does-not-exist"),
            file: Some(file),
            results_path: None,
        };
        let mut recorder = Recorder::default();
        let summary = run_tickets(&opts, &TicketProfile::default(), &mut recorder).unwrap();
        assert_eq!(summary.results.len(), 1);
    }

    #[test]
    fn test_title_preview() {
        assert_eq!(title_preview("short"), "short");
        let long = "x".repeat(60);
        assert_eq!(title_preview(&long), format!("{}...", "x".repeat(50)));
        let exact = "é".repeat(50);
        assert_eq!(title_preview(&exact), exact);
    }
}
