use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::stats;
use crate::errors::{AppError, AppResult};
use crate::models::roster::Roster;
use crate::store::{RecordStore, SqliteSheet, StoreKind};
use crate::utils::colors::{CYAN, GREEN, RED, RESET, YELLOW};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        let path = cfg.store_path();
        if StoreKind::for_path(&path) != StoreKind::Sqlite {
            return Err(AppError::Unsupported(format!(
                "`db` maintenance needs a SQLite roster, got {}",
                path.display()
            )));
        }

        // opening already applies pending migrations
        let mut sheet = SqliteSheet::open(&path)?;

        //
        // 1) MIGRATE
        //
        if *migrate {
            println!("{}▶ Running migrations…{}", CYAN, RESET);
            run_pending_migrations(&sheet.pool().conn)?;
            println!("{}✔ Migration completed.{}\n", GREEN, RESET);
        }

        //
        // 2) INFO
        //
        if *info {
            stats::print_db_info(sheet.pool(), &path)?;
        }

        //
        // 3) CHECK
        //
        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String =
                sheet
                    .pool()
                    .conn
                    .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}", RED, RESET, integrity);
            }

            println!("{}▶ Validating roster…{}", CYAN, RESET);
            match Roster::from_rows(sheet.read_all()?) {
                Ok(roster) => {
                    println!(
                        "{}✔ {} record(s) valid.{}",
                        GREEN,
                        roster.len(),
                        RESET
                    );
                    for bad in roster.malformed() {
                        println!("{}✘ {}{}", RED, bad.message, RESET);
                    }
                    for r in roster.torn() {
                        println!(
                            "{}⚠ Row {} ({}): status without time{}",
                            YELLOW, r.row, r.id, RESET
                        );
                    }
                }
                Err(e) => println!("{}✘ Roster invalid:{} {}", RED, RESET, e),
            }
            println!();
        }

        //
        // 4) VACUUM
        //
        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            sheet.pool().conn.execute_batch("VACUUM;")?;
            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }
    }

    Ok(())
}
