//! Attendance ledger client: the entry/exit state machine run against a
//! record store.

use crate::core::clock::{Clock, SystemClock};
use crate::models::outcome::Outcome;
use crate::models::record::{AttendanceRecord, ENTERED, EXITED, RecordState};
use crate::models::roster::Roster;
use crate::store::{Column, RecordStore, StoreResult};
use crate::ui::messages::warning;

#[derive(Debug, Clone, Copy)]
pub struct LedgerOptions {
    /// Re-read the matched row right before writing and give up with
    /// [`Outcome::Conflict`] if another kiosk changed it.
    pub verify_before_write: bool,
}

impl Default for LedgerOptions {
    fn default() -> Self {
        Self {
            verify_before_write: true,
        }
    }
}

/// Which status/time pair a transition writes.
#[derive(Debug, Clone, Copy)]
enum Transition {
    Entry,
    Exit,
}

impl Transition {
    fn columns(self) -> (Column, Column, &'static str) {
        match self {
            Transition::Entry => (Column::EntryStatus, Column::EntryTime, ENTERED),
            Transition::Exit => (Column::ExitStatus, Column::ExitTime, EXITED),
        }
    }

    fn operation(self) -> &'static str {
        match self {
            Transition::Entry => "entry",
            Transition::Exit => "exit",
        }
    }
}

pub struct Ledger<S: RecordStore, C: Clock = SystemClock> {
    store: S,
    clock: C,
    options: LedgerOptions,
}

impl<S: RecordStore> Ledger<S, SystemClock> {
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: RecordStore, C: Clock> Ledger<S, C> {
    pub fn with_clock(store: S, clock: C) -> Self {
        Self {
            store,
            clock,
            options: LedgerOptions::default(),
        }
    }

    pub fn options(mut self, options: LedgerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Validated full snapshot, for read-only reporting.
    pub fn snapshot(&mut self) -> StoreResult<Roster> {
        Roster::from_rows(self.store.read_all()?)
    }

    /// Mark entry or exit for `identifier`.
    ///
    /// One full read per call; a transition adds exactly two cell writes
    /// (status, then time). Completed records are never written again.
    pub fn process_scan(&mut self, identifier: &str) -> Outcome {
        let roster = match self.snapshot() {
            Ok(r) => r,
            Err(e) => return Outcome::StoreError(e.to_string()),
        };

        let Some(record) = roster.find(identifier) else {
            // the scanned row exists but cannot be trusted
            if let Some(bad) = roster.find_malformed(identifier) {
                return Outcome::StoreError(bad.message.clone());
            }
            return Outcome::NotFound {
                identifier: identifier.to_string(),
            };
        };

        if !roster.malformed().is_empty() {
            warning(format!(
                "{} roster row(s) failed validation and were skipped; run `rattend db --check`.",
                roster.malformed().len()
            ));
        }

        if record.is_torn() {
            warning(format!(
                "Record '{}' (row {}) has a status without its time; a previous update was interrupted.",
                record.id, record.row
            ));
        }

        match record.state() {
            RecordState::Unprocessed => self.apply(record, Transition::Entry),
            RecordState::Entered => self.apply(record, Transition::Exit),
            RecordState::Completed => Outcome::AlreadyProcessed {
                name: record.name.clone(),
                branch: record.branch.clone(),
                entry_time: record.entry_time.clone(),
                exit_time: record.exit_time.clone(),
            },
        }
    }

    fn apply(&mut self, record: &AttendanceRecord, transition: Transition) -> Outcome {
        if self.options.verify_before_write {
            match self.unchanged(record) {
                Ok(true) => {}
                Ok(false) => {
                    return Outcome::Conflict {
                        identifier: record.id.clone(),
                    };
                }
                Err(e) => return Outcome::StoreError(e.to_string()),
            }
        }

        let now = self.clock.timestamp();
        let (status_col, time_col, status) = transition.columns();

        if let Err(e) = self.store.write_cell(record.row, status_col, status) {
            return Outcome::StoreError(e.to_string());
        }
        if let Err(e) = self.store.write_cell(record.row, time_col, &now) {
            return Outcome::StoreError(format!(
                "{status_col} for '{}' was set but {time_col} was not: {e}",
                record.id
            ));
        }

        // Audit is best-effort: the transition is already in the store.
        let message = format!("{} ({}) {} at {}", record.name, record.branch, status, now);
        if let Err(e) = self
            .store
            .audit(transition.operation(), &record.id, &message)
        {
            warning(format!("Failed to write audit log: {}", e));
        }

        match transition {
            Transition::Entry => Outcome::EntryMarked {
                name: record.name.clone(),
                branch: record.branch.clone(),
                at: now,
            },
            Transition::Exit => Outcome::ExitMarked {
                name: record.name.clone(),
                branch: record.branch.clone(),
                at: now,
            },
        }
    }

    /// Re-read the row and check it still holds the same ID in the same state.
    fn unchanged(&mut self, record: &AttendanceRecord) -> StoreResult<bool> {
        let Some(raw) = self.store.read_row(record.row)? else {
            return Ok(false);
        };
        let fresh = AttendanceRecord::from_row(&raw)?;
        Ok(fresh.id == record.id && fresh.state() == record.state())
    }
}
