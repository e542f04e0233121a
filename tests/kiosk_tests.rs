mod common;
use common::{temp_out, write_qr_png};
use image::{GrayImage, Luma};
use rattend::core::clock::FixedClock;
use rattend::core::kiosk::{KioskEvent, KioskLogic, SessionTally};
use rattend::core::ledger::Ledger;
use rattend::core::scan::ScanResult;
use rattend::models::outcome::Outcome;
use rattend::store::{Column, MemoryStore, RowRef};
use std::io::Cursor;

fn ledger() -> Ledger<MemoryStore, FixedClock> {
    let store = MemoryStore::from_rows(vec![
        vec![(Column::Id, "A1"), (Column::Name, "Jane"), (Column::Branch, "CS")],
        vec![(Column::Id, "B2"), (Column::Name, "Arjun"), (Column::Branch, "EEE")],
    ]);
    Ledger::with_clock(store, FixedClock::at("2025-08-18 09:00:00").expect("clock"))
}

#[test]
fn test_kiosk_typed_session() {
    let mut ledger = ledger();
    let input = Cursor::new("A1\n\n  B2  \nA1\nA1\nZZ9\n");

    let mut events = Vec::new();
    let tally = KioskLogic::run(&mut ledger, input, |e| events.push(e.clone())).expect("run");

    assert_eq!(
        tally,
        SessionTally {
            entries: 2,
            exits: 1,
            already_processed: 1,
            not_found: 1,
            ..SessionTally::default()
        }
    );
    assert_eq!(tally.total(), 5);
    assert_eq!(events.len(), 5);
    assert!(matches!(
        &events[4],
        KioskEvent::Typed(Outcome::NotFound { identifier }) if identifier == "ZZ9"
    ));
}

#[test]
fn test_kiosk_stops_on_quit() {
    let mut ledger = ledger();
    let input = Cursor::new("A1\nquit\nB2\n");

    let tally = KioskLogic::run(&mut ledger, input, |_| {}).expect("run");

    assert_eq!(tally.entries, 1);
    assert_eq!(ledger.store().cell(RowRef(3), Column::EntryStatus), Some(""));
}

#[test]
fn test_kiosk_scans_image_lines() {
    let qr = write_qr_png("kiosk_qr", "B2");
    let blank = temp_out("kiosk_blank", "png");
    GrayImage::from_pixel(100, 100, Luma([255u8]))
        .save(&blank)
        .expect("save");

    let mut ledger = ledger();
    let input = Cursor::new(format!("{qr}\n{blank}\n"));

    let mut events = Vec::new();
    let tally = KioskLogic::run(&mut ledger, input, |e| events.push(e.clone())).expect("run");

    assert_eq!(tally.entries, 1);
    assert_eq!(tally.no_code, 1);
    assert!(matches!(
        &events[0],
        KioskEvent::Scanned(ScanResult::Processed { payload, .. }) if payload == "B2"
    ));
    assert_eq!(events[1], KioskEvent::Scanned(ScanResult::NoCode));
}

#[test]
fn test_kiosk_counts_store_failures() {
    let mut ledger = ledger();
    ledger.store_mut().fail_reads("offline");

    let tally = KioskLogic::run(&mut ledger, Cursor::new("A1\nB2\n"), |_| {}).expect("run");

    assert_eq!(tally.errors, 2);
    assert_eq!(tally.entries, 0);
}
