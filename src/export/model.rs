use crate::models::record::AttendanceRecord;
use serde::Serialize;

/// Flat attendance report row.
#[derive(Serialize, Clone, Debug)]
pub struct RecordExport {
    pub id: String,
    pub name: String,
    pub branch: String,
    pub state: String,
    pub entry_time: String,
    pub exit_time: String,
}

impl From<&AttendanceRecord> for RecordExport {
    fn from(r: &AttendanceRecord) -> Self {
        Self {
            id: r.id.clone(),
            name: r.name.clone(),
            branch: r.branch.clone(),
            state: r.state().as_str().to_string(),
            entry_time: r.entry_time.clone(),
            exit_time: r.exit_time.clone(),
        }
    }
}

/// Header for CSV / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["id", "name", "branch", "state", "entry_time", "exit_time"]
}

pub(crate) fn record_to_row(r: &RecordExport) -> Vec<String> {
    vec![
        r.id.clone(),
        r.name.clone(),
        r.branch.clone(),
        r.state.clone(),
        r.entry_time.clone(),
        r.exit_time.clone(),
    ]
}
