use crate::core::clock::Clock;
use crate::core::ledger::Ledger;
use crate::decoder::{self, capture::Capture};
use crate::errors::{AppError, AppResult};
use crate::models::outcome::Outcome;
use crate::store::RecordStore;

/// What happened to one captured image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanResult {
    /// No QR code could be read; the user should retry.
    NoCode,
    Processed { payload: String, outcome: Outcome },
}

/// High-level logic shared by `scan`, `mark` and `kiosk`.
pub struct ScanLogic;

impl ScanLogic {
    /// Capture an image, decode it and hand the payload to the ledger.
    ///
    /// Only capture failures (unreadable file, not an image) are errors.
    pub fn scan_image<S, C, K>(ledger: &mut Ledger<S, C>, capture: &mut K) -> AppResult<ScanResult>
    where
        S: RecordStore,
        C: Clock,
        K: Capture + ?Sized,
    {
        let image = capture.capture()?;

        let Some(payload) = decoder::decode(&image) else {
            return Ok(ScanResult::NoCode);
        };

        let outcome = ledger.process_scan(payload.trim());
        Ok(ScanResult::Processed { payload, outcome })
    }

    /// Process a typed identifier.
    pub fn mark<S, C>(ledger: &mut Ledger<S, C>, input: &str) -> AppResult<Outcome>
    where
        S: RecordStore,
        C: Clock,
    {
        let id = normalize_identifier(input)
            .ok_or_else(|| AppError::InvalidIdentifier(input.to_string()))?;
        Ok(ledger.process_scan(id))
    }
}

/// Trimmed identifier, `None` if nothing is left.
pub fn normalize_identifier(input: &str) -> Option<&str> {
    let id = input.trim();
    if id.is_empty() { None } else { Some(id) }
}
