use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW};
use std::fs;
use std::path::Path;

pub fn print_db_info(pool: &mut DbPool, db_path: &Path) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!(
        "{}• File:{} {}{}{}",
        CYAN,
        RESET,
        YELLOW,
        db_path.display(),
        RESET
    );
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) RECORDS PER STATE
    //
    let (total, entered, exited): (i64, i64, i64) = pool.conn.query_row(
        r#"SELECT COUNT(*),
                  COALESCE(SUM("EntryStatus" <> ''), 0),
                  COALESCE(SUM("ExitStatus" <> ''), 0)
           FROM attendance"#,
        [],
        |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
    )?;

    println!(
        "{}• Records:{} {}{}{}",
        CYAN, RESET, GREEN, total, RESET
    );
    println!("    entered: {}", entered);
    println!("    exited:  {}", exited);

    //
    // 3) LOG SIZE
    //
    let log_rows: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;
    println!("{}• Log entries:{} {}", CYAN, RESET, log_rows);

    println!();
    Ok(())
}
