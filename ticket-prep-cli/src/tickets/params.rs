//! Parameter bundle handed to the host's create-ticket action

use serde::{Deserialize, Serialize};

use super::profile::TicketProfile;
use super::reader::SpreadsheetRow;

/// Action identifier the host dispatches on
pub const CREATE_TICKET_ACTION: &str = "create-ticket";

/// One key/value classification tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizationEntry {
    pub key: String,
    pub value: String,
}

impl CategorizationEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Parameters for a single create-ticket call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketParams {
    pub action: String,
    pub title: String,
    pub description: String,
    pub severity: String,
    pub assigned_group: String,
    pub categorization: Vec<CategorizationEntry>,
}

/// Build the bundle for one row
///
/// Text fields are trimmed. A blank or missing severity falls back to the
/// profile default; group and categorization always come from the profile.
pub fn build_ticket_params(row: &SpreadsheetRow, profile: &TicketProfile) -> TicketParams {
    let severity = row
        .severity
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(profile.default_severity.as_str())
        .to_string();

    TicketParams {
        action: CREATE_TICKET_ACTION.to_string(),
        title: row.title.trim().to_string(),
        description: row.description.trim().to_string(),
        severity,
        assigned_group: profile.assigned_group.clone(),
        categorization: profile.categorization.clone(),
    }
}
