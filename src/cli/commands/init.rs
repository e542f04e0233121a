use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log;
use crate::errors::AppResult;
use crate::store::{CsvSheet, SqliteSheet, StoreKind};
use crate::ui::messages::{info, success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - an empty roster: a CSV header line, or the SQLite schema
pub fn handle(cli: &Cli) -> AppResult<()> {
    let store_path = Config::init_all(cli.store.clone(), cli.test)?;

    println!("⚙️  Initializing rAttend…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗂️  Roster      : {}", store_path.display());

    match StoreKind::for_path(&store_path) {
        StoreKind::Csv => {
            if store_path.exists() {
                info(format!(
                    "Roster sheet already exists, left untouched: {}",
                    store_path.display()
                ));
            } else {
                CsvSheet::create(&store_path)?;
                success(format!("Roster sheet created at {}", store_path.display()));
            }
        }
        StoreKind::Sqlite => {
            let mut sheet = SqliteSheet::create(&store_path)?;
            success(format!("Roster database initialized at {}", store_path.display()));

            // internal log, non blocking
            if let Err(e) = log::ttlog(
                &sheet.pool().conn,
                "init",
                "Roster initialized",
                &format!("Roster initialized at {}", store_path.display()),
            ) {
                warning(format!("Failed to write internal log: {}", e));
            }
        }
    }

    println!("🎉 rAttend initialization completed!");
    Ok(())
}
