//! Boundary to the host-executed create-ticket action

use colored::*;

use super::params::TicketParams;
use super::results::RunStatus;

/// Receives one bundle per ticket
///
/// Execution happens in a host environment outside this process; an
/// implementation only reports how far the bundle got on this side.
pub trait TicketAction {
    fn submit(&mut self, params: &TicketParams) -> RunStatus;
}

/// Hands bundles to the host by announcing them on stdout
#[derive(Debug, Default)]
pub struct HostHandoff {
    /// Print the full JSON bundle for each ticket
    pub show_params: bool,
}

impl HostHandoff {
    pub fn new(show_params: bool) -> Self {
        Self { show_params }
    }
}

impl TicketAction for HostHandoff {
    fn submit(&mut self, params: &TicketParams) -> RunStatus {
        if self.show_params {
            match serde_json::to_string_pretty(params) {
                Ok(json) => {
                    println!("   Parameters:");
                    for line in json.lines() {
                        println!("   {}", line.dimmed());
                    }
                }
                Err(e) => log::warn!("Failed to format parameters for '{}': {}", params.title, e),
            }
        }

        println!(
            "   {} host will execute {}",
            "→".cyan(),
            params.action.bright_white()
        );
        RunStatus::PreparedForQcli
    }
}
