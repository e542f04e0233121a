use crate::cli::commands::open_ledger;
use crate::config::Config;
use crate::core::kiosk::{KioskEvent, KioskLogic, SessionTally};
use crate::errors::AppResult;
use crate::ui::messages::{error, header, info};
use crate::ui::report::{render_outcome, render_scan};
use std::io;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut ledger = open_ledger(cfg)?;

    header("rAttend kiosk");
    info(format!("Roster: {}", ledger.store().describe()));
    println!("Scan a QR code or type a student ID and press Enter.");
    println!("An image path scans that image. Type `quit` to stop.\n");

    let stdin = io::stdin();
    let tally = KioskLogic::run(&mut ledger, stdin.lock(), |event| {
        match event {
            KioskEvent::Scanned(result) => render_scan(result),
            KioskEvent::Typed(outcome) => render_outcome(outcome),
            KioskEvent::CaptureFailed { source, message } => {
                error(format!("Cannot scan {}: {}", source, message))
            }
        }
        println!();
    })?;

    print_tally(&tally);
    Ok(())
}

fn print_tally(tally: &SessionTally) {
    header("Session summary");
    println!("Scans processed   : {}", tally.total());
    println!("Entries marked    : {}", tally.entries);
    println!("Exits marked      : {}", tally.exits);
    println!("Already processed : {}", tally.already_processed);
    println!("Not found         : {}", tally.not_found);
    println!("No QR code        : {}", tally.no_code);
    println!("Conflicts         : {}", tally.conflicts);
    println!("Errors            : {}", tally.errors);
}
