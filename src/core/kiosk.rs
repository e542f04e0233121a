//! Blocking kiosk loop over line input.
//!
//! Keyboard-wedge scanners type the QR payload followed by Enter, so every
//! line is an identifier unless it names an image file on disk.

use crate::core::clock::Clock;
use crate::core::ledger::Ledger;
use crate::core::scan::{ScanLogic, ScanResult, normalize_identifier};
use crate::decoder::capture::FileCapture;
use crate::errors::AppResult;
use crate::models::outcome::Outcome;
use crate::store::RecordStore;
use crate::utils::path::is_image_file;
use serde::Serialize;
use std::io::BufRead;
use std::path::Path;

/// One processed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KioskEvent {
    Scanned(ScanResult),
    Typed(Outcome),
    CaptureFailed { source: String, message: String },
}

/// Counters for one kiosk session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionTally {
    pub entries: usize,
    pub exits: usize,
    pub already_processed: usize,
    pub not_found: usize,
    pub no_code: usize,
    pub conflicts: usize,
    pub errors: usize,
}

impl SessionTally {
    pub fn record(&mut self, event: &KioskEvent) {
        match event {
            KioskEvent::Scanned(ScanResult::NoCode) => self.no_code += 1,
            KioskEvent::Scanned(ScanResult::Processed { outcome, .. }) | KioskEvent::Typed(outcome) => {
                self.record_outcome(outcome)
            }
            KioskEvent::CaptureFailed { .. } => self.errors += 1,
        }
    }

    fn record_outcome(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::EntryMarked { .. } => self.entries += 1,
            Outcome::ExitMarked { .. } => self.exits += 1,
            Outcome::AlreadyProcessed { .. } => self.already_processed += 1,
            Outcome::NotFound { .. } => self.not_found += 1,
            Outcome::Conflict { .. } => self.conflicts += 1,
            Outcome::StoreError(_) => self.errors += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.entries
            + self.exits
            + self.already_processed
            + self.not_found
            + self.no_code
            + self.conflicts
            + self.errors
    }
}

pub struct KioskLogic;

impl KioskLogic {
    /// Process `input` line by line until EOF, `quit` or `exit`.
    ///
    /// `on_event` is called after every processed line.
    pub fn run<S, C, R, F>(
        ledger: &mut Ledger<S, C>,
        input: R,
        mut on_event: F,
    ) -> AppResult<SessionTally>
    where
        S: RecordStore,
        C: Clock,
        R: BufRead,
        F: FnMut(&KioskEvent),
    {
        let mut tally = SessionTally::default();

        for line in input.lines() {
            let line = line?;
            let Some(entry) = normalize_identifier(&line) else {
                continue;
            };

            if entry.eq_ignore_ascii_case("quit") || entry.eq_ignore_ascii_case("exit") {
                break;
            }

            let event = Self::process_line(ledger, entry);
            tally.record(&event);
            on_event(&event);
        }

        Ok(tally)
    }

    fn process_line<S: RecordStore, C: Clock>(ledger: &mut Ledger<S, C>, entry: &str) -> KioskEvent {
        let path = Path::new(entry);
        if !is_image_file(path) {
            return KioskEvent::Typed(ledger.process_scan(entry));
        }

        let mut capture = FileCapture::new(path);
        match ScanLogic::scan_image(ledger, &mut capture) {
            Ok(result) => KioskEvent::Scanned(result),
            Err(e) => KioskEvent::CaptureFailed {
                source: entry.to_string(),
                message: e.to_string(),
            },
        }
    }
}
