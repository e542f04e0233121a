use std::fmt;

/// Result of processing one scanned identifier. Never an error: store
/// failures are reported through [`Outcome::StoreError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    EntryMarked {
        name: String,
        branch: String,
        at: String,
    },
    ExitMarked {
        name: String,
        branch: String,
        at: String,
    },
    AlreadyProcessed {
        name: String,
        branch: String,
        entry_time: String,
        exit_time: String,
    },
    NotFound {
        identifier: String,
    },
    /// The row changed between the snapshot and the write.
    Conflict {
        identifier: String,
    },
    StoreError(String),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::EntryMarked { name, branch, at } => {
                write!(f, "Entry marked for {name} ({branch}) at {at}")
            }
            Outcome::ExitMarked { name, branch, at } => {
                write!(f, "Exit marked for {name} ({branch}) at {at}")
            }
            Outcome::AlreadyProcessed { name, branch, .. } => {
                write!(f, "{name} ({branch}) has already entered and exited.")
            }
            Outcome::NotFound { identifier } => {
                write!(f, "Student ID '{identifier}' not found in records.")
            }
            Outcome::Conflict { identifier } => {
                write!(f, "Record '{identifier}' changed while scanning; nothing written.")
            }
            Outcome::StoreError(msg) => write!(f, "Database Error: {msg}"),
        }
    }
}
