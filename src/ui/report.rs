//! User-facing rendering of scan outcomes.

use crate::core::scan::ScanResult;
use crate::models::outcome::Outcome;
use crate::ui::messages::{error, info, success, warning};
use crate::utils::colors::colorize_in_out;

const NOT_RECORDED: &str = "Not recorded";

pub fn render_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::EntryMarked { .. } => success(outcome),
        Outcome::ExitMarked { .. } => warning(outcome),
        Outcome::AlreadyProcessed {
            entry_time,
            exit_time,
            ..
        } => {
            info(outcome);
            println!("   Current Status:");
            println!(
                "   • Entry: {}",
                colorize_in_out(entry_time, NOT_RECORDED, true)
            );
            println!(
                "   • Exit:  {}",
                colorize_in_out(exit_time, NOT_RECORDED, false)
            );
        }
        Outcome::NotFound { .. } => {
            error(outcome);
            eprintln!("   Please verify the QR code or contact the administrator.");
        }
        Outcome::Conflict { .. } => {
            warning(outcome);
            println!("   Another kiosk updated this record. Please scan again.");
        }
        Outcome::StoreError(_) => {
            error(outcome);
            eprintln!("   Please try again or contact technical support.");
        }
    }
}

pub fn render_scan(result: &ScanResult) {
    match result {
        ScanResult::NoCode => {
            error("No QR code detected in the image.");
            eprintln!("   Try again with:");
            eprintln!("   • Better lighting");
            eprintln!("   • QR code fully visible in frame");
            eprintln!("   • Hold camera steady");
            eprintln!("   • Clean camera lens");
        }
        ScanResult::Processed { payload, outcome } => {
            success(format!("Scanned Student ID: {}", payload));
            render_outcome(outcome);
        }
    }
}
