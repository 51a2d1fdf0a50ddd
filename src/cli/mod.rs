//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the session layer.

pub mod expense;
pub mod export;
pub mod file;
pub mod salary;

use std::path::Path;

use tracing::debug;

use crate::config::settings::Settings;
use crate::error::LedgerResult;
use crate::session::Session;
use crate::sync::LocalFile;

pub use expense::{handle_add_command, handle_show_command, handle_summary_command};
pub use export::{handle_export_command, ExportFormat};
pub use file::{handle_new_command, handle_open_command, handle_status_command};
pub use salary::{handle_salary_command, SalaryCommands};

/// Load the session for one command
///
/// `file_override` (the `--file` flag) wins over the file remembered in the
/// settings. With neither, the session starts unbound: read-only commands
/// see an empty ledger and mutations fail with `NoFileSelected`.
pub fn load_session(settings: &Settings, file_override: Option<&Path>) -> LedgerResult<Session> {
    let path = file_override.or(settings.current_file.as_deref());

    match path {
        Some(path) => {
            debug!(path = %path.display(), "Loading bound ledger file");
            Session::open(Box::new(LocalFile::open(path)?))
        }
        None => Ok(Session::new()),
    }
}
