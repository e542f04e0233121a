use crate::store::{Column, RowRef, SheetRow, StoreError, StoreResult};
use serde::Serialize;

pub const ENTERED: &str = "Entered";
pub const EXITED: &str = "Exited";

/// Where a record is in its entry/exit lifecycle.
///
/// `Unprocessed → Entered → Completed`; `Completed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RecordState {
    Unprocessed,
    Entered,
    Completed,
}

impl RecordState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordState::Unprocessed => "unprocessed",
            RecordState::Entered => "entered",
            RecordState::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecordState::Unprocessed => "Not arrived",
            RecordState::Entered => "Present",
            RecordState::Completed => "Left",
        }
    }
}

/// One validated roster row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceRecord {
    #[serde(skip)]
    pub row: RowRef,
    pub id: String,
    pub name: String,
    pub branch: String,
    pub entry_status: String,
    pub entry_time: String,
    pub exit_status: String,
    pub exit_time: String,
}

impl AttendanceRecord {
    /// Decode and validate a raw row.
    pub fn from_row(raw: &SheetRow) -> StoreResult<Self> {
        let malformed = |reason: String| StoreError::MalformedRecord {
            row: raw.row.0,
            reason,
        };

        let field = |column: Column| -> StoreResult<String> {
            raw.get(column)
                .map(str::to_string)
                .ok_or_else(|| malformed(format!("missing column '{}'", column)))
        };

        let id = field(Column::Id)?.trim().to_string();
        if id.is_empty() {
            return Err(malformed("blank ID".into()));
        }

        let entry_status = field(Column::EntryStatus)?.trim().to_string();
        if !entry_status.is_empty() && entry_status != ENTERED {
            return Err(malformed(format!(
                "EntryStatus must be empty or '{ENTERED}', found '{entry_status}'"
            )));
        }

        let exit_status = field(Column::ExitStatus)?.trim().to_string();
        if !exit_status.is_empty() && exit_status != EXITED {
            return Err(malformed(format!(
                "ExitStatus must be empty or '{EXITED}', found '{exit_status}'"
            )));
        }

        if entry_status.is_empty() && !exit_status.is_empty() {
            return Err(malformed(format!(
                "ID '{id}' is marked '{EXITED}' without an entry"
            )));
        }

        Ok(Self {
            row: raw.row,
            id,
            name: field(Column::Name)?,
            branch: field(Column::Branch)?,
            entry_status,
            entry_time: field(Column::EntryTime)?,
            exit_status,
            exit_time: field(Column::ExitTime)?,
        })
    }

    pub fn state(&self) -> RecordState {
        match (self.entry_status.is_empty(), self.exit_status.is_empty()) {
            (true, _) => RecordState::Unprocessed,
            (false, true) => RecordState::Entered,
            (false, false) => RecordState::Completed,
        }
    }

    /// Status written but its time missing: a transition interrupted
    /// between its two cell writes.
    pub fn is_torn(&self) -> bool {
        let entry_torn = !self.entry_status.is_empty() && self.entry_time.trim().is_empty();
        let exit_torn = !self.exit_status.is_empty() && self.exit_time.trim().is_empty();
        entry_torn || exit_torn
    }
}
