use crate::models::record::{AttendanceRecord, RecordState};
use crate::store::{Column, RowRef, SheetRow, StoreError, StoreResult};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

/// A validated snapshot of the whole roster, in store order.
///
/// Rows that fail validation are kept aside instead of poisoning the
/// snapshot: a typo in one row must not stop scans of everyone else.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    records: Vec<AttendanceRecord>,
    malformed: Vec<MalformedRow>,
}

/// A roster row that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRow {
    pub row: RowRef,
    /// Trimmed ID cell; empty when the cell is blank or missing.
    pub id: String,
    pub message: String,
}

/// Entries and exits stamped on one calendar day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DayActivity {
    pub entries: usize,
    pub exits: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RosterSummary {
    pub total: usize,
    pub unprocessed: usize,
    /// Entered and not yet exited.
    pub present: usize,
    pub completed: usize,
}

impl RosterSummary {
    /// Everyone who has entered, whether or not they left.
    pub fn entries(&self) -> usize {
        self.present + self.completed
    }

    pub fn exits(&self) -> usize {
        self.completed
    }
}

impl Roster {
    /// Validate every row. Fully blank rows are skipped and malformed rows
    /// are set aside; duplicate IDs reject the whole snapshot.
    pub fn from_rows(rows: Vec<SheetRow>) -> StoreResult<Self> {
        let mut records = Vec::with_capacity(rows.len());
        let mut malformed = Vec::new();
        let mut seen: HashMap<String, usize> = HashMap::new();

        for raw in rows.iter().filter(|r| !r.is_blank()) {
            let id = raw.get(Column::Id).unwrap_or("").trim().to_string();

            if !id.is_empty()
                && let Some(first) = seen.insert(id.clone(), raw.row.0)
            {
                return Err(StoreError::DuplicateId {
                    id,
                    first,
                    second: raw.row.0,
                });
            }

            match AttendanceRecord::from_row(raw) {
                Ok(record) => records.push(record),
                Err(e) => malformed.push(MalformedRow {
                    row: raw.row,
                    id,
                    message: e.to_string(),
                }),
            }
        }

        Ok(Self { records, malformed })
    }

    /// Exact string match against the stored ID.
    pub fn find(&self, id: &str) -> Option<&AttendanceRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }

    pub fn malformed(&self) -> &[MalformedRow] {
        &self.malformed
    }

    /// Malformed row carrying exactly this ID, if any.
    pub fn find_malformed(&self, id: &str) -> Option<&MalformedRow> {
        self.malformed.iter().find(|m| m.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn torn(&self) -> impl Iterator<Item = &AttendanceRecord> {
        self.records.iter().filter(|r| r.is_torn())
    }

    pub fn summary(&self) -> RosterSummary {
        let mut s = RosterSummary {
            total: self.records.len(),
            ..RosterSummary::default()
        };
        for r in &self.records {
            match r.state() {
                RecordState::Unprocessed => s.unprocessed += 1,
                RecordState::Entered => s.present += 1,
                RecordState::Completed => s.completed += 1,
            }
        }
        s
    }

    /// Entries and exits whose timestamps fall on `day`.
    pub fn activity_on(&self, day: NaiveDate) -> DayActivity {
        let prefix = day.format("%Y-%m-%d").to_string();
        let on_day = |status: &str, time: &str| !status.is_empty() && time.trim().starts_with(prefix.as_str());

        let mut a = DayActivity::default();
        for r in &self.records {
            if on_day(r.entry_status.as_str(), r.entry_time.as_str()) {
                a.entries += 1;
            }
            if on_day(r.exit_status.as_str(), r.exit_time.as_str()) {
                a.exits += 1;
            }
        }
        a
    }
}
