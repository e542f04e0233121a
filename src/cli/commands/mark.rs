use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::scan::{ScanLogic, normalize_identifier};
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::ui::report::render_outcome;

/// Manual entry: process a typed student ID.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Mark { id } = cmd {
        if normalize_identifier(id).is_none() {
            warning("Please enter a valid Student ID.");
            return Ok(());
        }

        let mut ledger = open_ledger(cfg)?;
        let outcome = ScanLogic::mark(&mut ledger, id)?;
        render_outcome(&outcome);
    }

    Ok(())
}
