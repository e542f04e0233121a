pub mod backup;
pub mod clock;
pub mod kiosk;
pub mod ledger;
pub mod log;
pub mod scan;
