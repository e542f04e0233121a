use super::{Column, RecordStore, RowRef, SheetRow, StoreError, StoreResult};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::fs;
use std::path::{Path, PathBuf};

/// A roster kept as a CSV file, e.g. a sheet exported from a spreadsheet
/// and shared between kiosks on a network drive.
///
/// Columns may appear in any order and extra columns survive writes. Row
/// addresses are sheet row numbers: the header is row 1.
pub struct CsvSheet {
    path: PathBuf,
}

struct Grid {
    headers: StringRecord,
    records: Vec<StringRecord>,
}

impl CsvSheet {
    /// Open an existing sheet, checking that all roster columns are present.
    pub fn open(path: &Path) -> StoreResult<Self> {
        if !path.is_file() {
            return Err(StoreError::Unavailable(format!(
                "roster sheet not found: {} (run `rattend init` first)",
                path.display()
            )));
        }

        let sheet = Self {
            path: path.to_path_buf(),
        };
        let grid = sheet.load()?;
        for column in Column::ALL {
            column_index(&grid.headers, column)?;
        }
        Ok(sheet)
    }

    /// Create an empty sheet holding only the header line.
    pub fn create(path: &Path) -> StoreResult<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut wtr = WriterBuilder::new().from_path(path)?;
        wtr.write_record(Column::ALL.iter().map(|c| c.header()))?;
        wtr.flush()?;
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> StoreResult<Grid> {
        let mut rdr = ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_path(&self.path)?;

        let headers = rdr.headers()?.clone();
        let mut records = Vec::new();
        for rec in rdr.records() {
            records.push(rec?);
        }

        Ok(Grid { headers, records })
    }

    /// Rewrite the whole file through a temporary sibling, then rename.
    fn save(&self, grid: &Grid) -> StoreResult<()> {
        let tmp = self.path.with_extension("csv.tmp");
        {
            let mut wtr = WriterBuilder::new().flexible(true).from_path(&tmp)?;
            wtr.write_record(&grid.headers)?;
            for rec in &grid.records {
                wtr.write_record(rec)?;
            }
            wtr.flush()?;
        }
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn column_index(headers: &StringRecord, column: Column) -> StoreResult<usize> {
    headers
        .iter()
        .position(|h| h == column.header())
        .ok_or_else(|| StoreError::MissingColumn(column.header().to_string()))
}

fn to_sheet_row(headers: &StringRecord, index: usize, rec: &StringRecord) -> SheetRow {
    let mut row = SheetRow::new(RowRef(index + 2));
    for (i, header) in headers.iter().enumerate() {
        row.cells
            .insert(header.to_string(), rec.get(i).unwrap_or("").to_string());
    }
    row
}

impl RecordStore for CsvSheet {
    fn describe(&self) -> String {
        format!("csv:{}", self.path.display())
    }

    fn read_all(&mut self) -> StoreResult<Vec<SheetRow>> {
        let grid = self.load()?;
        Ok(grid
            .records
            .iter()
            .enumerate()
            .map(|(i, rec)| to_sheet_row(&grid.headers, i, rec))
            .collect())
    }

    fn read_row(&mut self, row: RowRef) -> StoreResult<Option<SheetRow>> {
        let grid = self.load()?;
        let Some(index) = row.0.checked_sub(2) else {
            return Ok(None);
        };
        Ok(grid
            .records
            .get(index)
            .map(|rec| to_sheet_row(&grid.headers, index, rec)))
    }

    fn write_cell(&mut self, row: RowRef, column: Column, value: &str) -> StoreResult<()> {
        let mut grid = self.load()?;
        let col = column_index(&grid.headers, column)?;

        let index = row
            .0
            .checked_sub(2)
            .filter(|i| *i < grid.records.len())
            .ok_or(StoreError::RowOutOfRange(row.0))?;

        let old = &grid.records[index];
        let width = old.len().max(col + 1);
        let mut updated = StringRecord::with_capacity(old.as_slice().len(), width);
        for i in 0..width {
            if i == col {
                updated.push_field(value);
            } else {
                updated.push_field(old.get(i).unwrap_or(""));
            }
        }
        grid.records[index] = updated;

        self.save(&grid)
    }
}
