use chrono::{Local, NaiveDateTime};

/// Format of EntryTime / ExitTime cells.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    fn timestamp(&self) -> String {
        self.now().format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Local wall-clock time of this process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Parse `YYYY-MM-DD HH:MM:SS`.
    pub fn at(s: &str) -> Option<Self> {
        NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
            .ok()
            .map(FixedClock)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
