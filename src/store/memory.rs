use super::{Column, RecordStore, RowRef, SheetRow, StoreError, StoreResult};

type Interleave = Box<dyn FnOnce(&mut Vec<SheetRow>)>;

/// In-process roster.
///
/// Counts every store operation and can inject failures, so callers can
/// check exactly what a scan did to the store. Test support only.
#[doc(hidden)]
#[derive(Default)]
pub struct MemoryStore {
    rows: Vec<SheetRow>,
    full_reads: usize,
    row_reads: usize,
    writes: Vec<(RowRef, Column, String)>,
    audits: Vec<(String, String, String)>,
    fail_reads: Option<String>,
    fail_row_reads: Option<String>,
    fail_write_at: Option<(usize, String)>,
    interleave: Option<Interleave>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from rows in order; row addresses start at 2 like a
    /// sheet with a header line.
    pub fn from_rows<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = Vec<(Column, &'a str)>>,
    {
        let mut store = Self::new();
        for cells in rows {
            store.push(&cells);
        }
        store
    }

    /// Append a row; unspecified columns are empty.
    pub fn push(&mut self, cells: &[(Column, &str)]) -> RowRef {
        let row = RowRef(self.rows.len() + 2);
        let mut sheet_row = SheetRow::new(row);
        for column in Column::ALL {
            sheet_row.set(column, "");
        }
        for (column, value) in cells {
            sheet_row.set(*column, value);
        }
        self.rows.push(sheet_row);
        row
    }

    /// Append a row with arbitrary headers, for malformed-data tests.
    pub fn push_raw(&mut self, cells: &[(&str, &str)]) -> RowRef {
        let row = RowRef(self.rows.len() + 2);
        let mut sheet_row = SheetRow::new(row);
        for (header, value) in cells {
            sheet_row
                .cells
                .insert(header.to_string(), value.to_string());
        }
        self.rows.push(sheet_row);
        row
    }

    pub fn rows(&self) -> &[SheetRow] {
        &self.rows
    }

    pub fn cell(&self, row: RowRef, column: Column) -> Option<&str> {
        self.rows
            .iter()
            .find(|r| r.row == row)
            .and_then(|r| r.get(column))
    }

    pub fn full_reads(&self) -> usize {
        self.full_reads
    }

    pub fn row_reads(&self) -> usize {
        self.row_reads
    }

    pub fn writes(&self) -> &[(RowRef, Column, String)] {
        &self.writes
    }

    pub fn audits(&self) -> &[(String, String, String)] {
        &self.audits
    }

    /// Make every read fail with `message`.
    pub fn fail_reads(&mut self, message: &str) {
        self.fail_reads = Some(message.to_string());
    }

    /// Make every `read_row` fail with `message`; full reads still work.
    pub fn fail_row_reads(&mut self, message: &str) {
        self.fail_row_reads = Some(message.to_string());
    }

    /// Make the `n`-th write (1-based, counted from now) fail with `message`.
    pub fn fail_write(&mut self, n: usize, message: &str) {
        self.fail_write_at = Some((self.writes.len() + n, message.to_string()));
    }

    /// Run `f` on the rows right before the next `read_row`, as if another
    /// kiosk had written in between.
    pub fn interleave<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Vec<SheetRow>) + 'static,
    {
        self.interleave = Some(Box::new(f));
    }
}

impl RecordStore for MemoryStore {
    fn describe(&self) -> String {
        format!("memory ({} rows)", self.rows.len())
    }

    fn read_all(&mut self) -> StoreResult<Vec<SheetRow>> {
        if let Some(msg) = &self.fail_reads {
            return Err(StoreError::Unavailable(msg.clone()));
        }
        self.full_reads += 1;
        Ok(self.rows.clone())
    }

    fn read_row(&mut self, row: RowRef) -> StoreResult<Option<SheetRow>> {
        if let Some(msg) = &self.fail_reads {
            return Err(StoreError::Unavailable(msg.clone()));
        }
        if let Some(msg) = &self.fail_row_reads {
            return Err(StoreError::Unavailable(msg.clone()));
        }
        if let Some(f) = self.interleave.take() {
            f(&mut self.rows);
        }
        self.row_reads += 1;
        Ok(self.rows.iter().find(|r| r.row == row).cloned())
    }

    fn write_cell(&mut self, row: RowRef, column: Column, value: &str) -> StoreResult<()> {
        if let Some((at, msg)) = &self.fail_write_at
            && *at == self.writes.len() + 1
        {
            return Err(StoreError::Unavailable(msg.clone()));
        }

        let target = self
            .rows
            .iter_mut()
            .find(|r| r.row == row)
            .ok_or(StoreError::RowOutOfRange(row.0))?;
        target.set(column, value);
        self.writes.push((row, column, value.to_string()));
        Ok(())
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) -> StoreResult<()> {
        self.audits.push((
            operation.to_string(),
            target.to_string(),
            message.to_string(),
        ));
        Ok(())
    }
}
