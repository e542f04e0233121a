pub mod backup;
pub mod config;
pub mod db;
pub mod export;
pub mod init;
pub mod kiosk;
pub mod list;
pub mod log;
pub mod mark;
pub mod scan;
pub mod stats;

use crate::config::Config;
use crate::core::ledger::{Ledger, LedgerOptions};
use crate::errors::AppResult;
use crate::store::{RecordStore, open_store};

/// Composition root: open the configured roster and wrap it in a ledger.
pub(crate) fn open_ledger(cfg: &Config) -> AppResult<Ledger<Box<dyn RecordStore>>> {
    let store = open_store(cfg)?;
    Ok(Ledger::new(store).options(LedgerOptions {
        verify_before_write: cfg.verify_before_write,
    }))
}
