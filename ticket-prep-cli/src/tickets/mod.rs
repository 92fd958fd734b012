//! Spreadsheet-to-ticket preparation pipeline
//!
//! Locate a spreadsheet, read its rows, build one `TicketParams` per row and
//! hand each bundle to a [`action::TicketAction`]. The host environment
//! performs the actual ticket creation; nothing here talks to a ticketing API.

pub mod action;
pub mod driver;
pub mod error;
pub mod locate;
pub mod params;
pub mod profile;
pub mod reader;
pub mod results;
pub mod template;

#[cfg(test)]
mod fixtures;

pub use action::HostHandoff;
pub use driver::{RunOptions, run_tickets};
pub use error::RunError;
pub use locate::{locate_spreadsheets, select_spreadsheet};
pub use profile::TicketProfile;
pub use template::write_template_excel;
