use crate::cli::commands::open_ledger;
use crate::config::Config;
use crate::core::clock::{Clock, SystemClock};
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW};
use crate::utils::formatting::bold;

/// Today's attendance counters, from one roster snapshot.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut ledger = open_ledger(cfg)?;
    let roster = ledger.snapshot()?;
    let s = roster.summary();

    let today = SystemClock.now().date();
    let day = roster.activity_on(today);

    header(format!("Attendance stats for {}", today.format("%Y-%m-%d")));
    println!("{}• Roster size:{}       {}", CYAN, RESET, bold(&s.total.to_string()));
    println!("{}• Entries today:{}     {}{}{}", CYAN, RESET, GREEN, day.entries, RESET);
    println!("{}• Currently present:{} {}", CYAN, RESET, s.present);
    println!("{}• Exits today:{}       {}{}{}", CYAN, RESET, YELLOW, day.exits, RESET);
    println!("{}• Not arrived:{}       {}", CYAN, RESET, s.unprocessed);

    let torn = roster.torn().count();
    if torn > 0 {
        warning(format!(
            "{} record(s) have a status without its time (interrupted update).",
            torn
        ));
    }
    if !roster.malformed().is_empty() {
        warning(format!(
            "{} row(s) failed validation and are not counted; run `rattend db --check`.",
            roster.malformed().len()
        ));
    }

    println!();
    Ok(())
}
