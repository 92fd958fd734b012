//! Fixed ticket queue settings shared by every bundle of a run

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use super::params::CategorizationEntry;

/// Severity used when a row leaves `Severity` blank or the column is absent
pub const DEFAULT_SEVERITY: &str = "SEV_4";

/// Resolver group every ticket is assigned to
pub const DEFAULT_ASSIGNED_GROUP: &str = "CTFin Analytics Controllership";

/// Categorization triad as (key, value) pairs, in order
pub const DEFAULT_CATEGORIZATION: [(&str, &str); 3] = [
    ("category", "TRMS"),
    ("type", "Finance Analytics"),
    ("item", "Issues"),
];

/// Queue-level values that never come from spreadsheet rows
///
/// The default is the single queue this tool files into. A config file may
/// override the values, but categorization keys are always `category`,
/// `type`, `item` in that order; see [`TicketProfile::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketProfile {
    pub default_severity: String,
    pub assigned_group: String,
    pub categorization: Vec<CategorizationEntry>,
}

impl Default for TicketProfile {
    fn default() -> Self {
        Self {
            default_severity: DEFAULT_SEVERITY.to_string(),
            assigned_group: DEFAULT_ASSIGNED_GROUP.to_string(),
            categorization: DEFAULT_CATEGORIZATION
                .iter()
                .map(|(key, value)| CategorizationEntry::new(*key, *value))
                .collect(),
        }
    }
}

impl TicketProfile {
    /// Reject profiles that would produce malformed bundles
    pub fn validate(&self) -> Result<()> {
        if self.default_severity.trim().is_empty() {
            bail!("default_severity must not be empty");
        }
        if self.assigned_group.trim().is_empty() {
            bail!("assigned_group must not be empty");
        }

        let keys: Vec<&str> = self.categorization.iter().map(|c| c.key.as_str()).collect();
        let expected: Vec<&str> = DEFAULT_CATEGORIZATION.iter().map(|(key, _)| *key).collect();
        if keys != expected {
            bail!(
                "categorization must have exactly the keys [{}] in order, got [{}]",
                expected.join(", "),
                keys.join(", ")
            );
        }
        if let Some(entry) = self.categorization.iter().find(|c| c.value.trim().is_empty()) {
            bail!("categorization '{}' has an empty value", entry.key);
        }

        Ok(())
    }
}
