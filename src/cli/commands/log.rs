use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::AppResult;
use crate::store::{SqliteSheet, StoreKind};
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let path = cfg.store_path();
        if StoreKind::for_path(&path) == StoreKind::Csv {
            info("CSV rosters keep no internal log.");
            return Ok(());
        }

        let mut sheet = SqliteSheet::open(&path)?;
        LogLogic::print_log(sheet.pool())?;
    }

    Ok(())
}
