//! Record store boundary.
//!
//! A record store is the external, spreadsheet-like roster: one row per
//! student, read as a whole and written one cell at a time. Nothing here
//! knows about attendance states; rows are plain strings until
//! [`crate::models::record::AttendanceRecord::from_row`] validates them.

mod csv_sheet;
mod memory;
mod sqlite_sheet;

pub use csv_sheet::CsvSheet;
#[doc(hidden)]
pub use memory::MemoryStore;
pub use sqlite_sheet::SqliteSheet;

use crate::config::Config;
use crate::errors::AppResult;
use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Missing column '{0}' in roster header")]
    MissingColumn(String),

    #[error("Malformed record at row {row}: {reason}")]
    MalformedRecord { row: usize, reason: String },

    #[error("Duplicate ID '{id}' at rows {first} and {second}")]
    DuplicateId {
        id: String,
        first: usize,
        second: usize,
    },

    #[error("Row {0} does not exist")]
    RowOutOfRange(usize),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-specific row address: the sheet row number (header = 1) for
/// sheet-like stores, the rowid for SQLite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowRef(pub usize);

impl fmt::Display for RowRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The roster columns this system reads. Only the four status/time columns
/// are ever written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Id,
    Name,
    Branch,
    EntryStatus,
    EntryTime,
    ExitStatus,
    ExitTime,
}

impl Column {
    pub const ALL: [Column; 7] = [
        Column::Id,
        Column::Name,
        Column::Branch,
        Column::EntryStatus,
        Column::EntryTime,
        Column::ExitStatus,
        Column::ExitTime,
    ];

    /// Header text as it appears in the sheet.
    pub fn header(&self) -> &'static str {
        match self {
            Column::Id => "ID",
            Column::Name => "Name",
            Column::Branch => "Branch",
            Column::EntryStatus => "EntryStatus",
            Column::EntryTime => "EntryTime",
            Column::ExitStatus => "ExitStatus",
            Column::ExitTime => "ExitTime",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// One raw row, keyed by header text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRow {
    pub row: RowRef,
    pub cells: HashMap<String, String>,
}

impl SheetRow {
    pub fn new(row: RowRef) -> Self {
        Self {
            row,
            cells: HashMap::new(),
        }
    }

    pub fn get(&self, column: Column) -> Option<&str> {
        self.cells.get(column.header()).map(String::as_str)
    }

    pub fn set(&mut self, column: Column, value: &str) {
        self.cells
            .insert(column.header().to_string(), value.to_string());
    }

    pub fn is_blank(&self) -> bool {
        self.cells.values().all(|v| v.trim().is_empty())
    }
}

/// The external roster. Reads are full snapshots; writes replace one cell.
pub trait RecordStore {
    /// Human-readable location, used in messages and audit entries.
    fn describe(&self) -> String;

    /// Every row, in store order.
    fn read_all(&mut self) -> StoreResult<Vec<SheetRow>>;

    /// Re-read a single row, `None` if it no longer exists.
    fn read_row(&mut self, row: RowRef) -> StoreResult<Option<SheetRow>>;

    fn write_cell(&mut self, row: RowRef, column: Column, value: &str) -> StoreResult<()>;

    /// Append an audit entry. Stores without an audit trail ignore it.
    fn audit(&mut self, _operation: &str, _target: &str, _message: &str) -> StoreResult<()> {
        Ok(())
    }
}

impl<S: RecordStore + ?Sized> RecordStore for Box<S> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn read_all(&mut self) -> StoreResult<Vec<SheetRow>> {
        (**self).read_all()
    }

    fn read_row(&mut self, row: RowRef) -> StoreResult<Option<SheetRow>> {
        (**self).read_row(row)
    }

    fn write_cell(&mut self, row: RowRef, column: Column, value: &str) -> StoreResult<()> {
        (**self).write_cell(row, column, value)
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) -> StoreResult<()> {
        (**self).audit(operation, target, message)
    }
}

/// Which backend a roster path maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Csv,
    Sqlite,
}

impl StoreKind {
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => StoreKind::Csv,
            _ => StoreKind::Sqlite,
        }
    }
}

/// Open the configured roster. Failure here is fatal for the command.
pub fn open_store(cfg: &Config) -> AppResult<Box<dyn RecordStore>> {
    let path = cfg.store_path();

    let store: Box<dyn RecordStore> = match StoreKind::for_path(&path) {
        StoreKind::Csv => Box::new(CsvSheet::open(&path)?),
        StoreKind::Sqlite => Box::new(SqliteSheet::open(&path)?),
    };

    Ok(store)
}
