mod common;
use common::{qr_image, temp_out, write_qr_png};
use image::{DynamicImage, GrayImage, Luma};
use rattend::core::clock::FixedClock;
use rattend::core::ledger::Ledger;
use rattend::core::scan::{ScanLogic, ScanResult};
use rattend::decoder::capture::{Capture, FileCapture, ReaderCapture};
use rattend::decoder::decode;
use rattend::models::outcome::Outcome;
use rattend::store::{Column, MemoryStore};
use std::fs;
use std::io::Cursor;

fn roster() -> MemoryStore {
    MemoryStore::from_rows(vec![vec![
        (Column::Id, "12345"),
        (Column::Name, "Jane"),
        (Column::Branch, "CS"),
    ]])
}

#[test]
fn test_decode_generated_code() {
    let img = DynamicImage::ImageLuma8(qr_image("12345"));
    assert_eq!(decode(&img).as_deref(), Some("12345"));
}

#[test]
fn test_decode_blank_image_finds_nothing() {
    let blank = GrayImage::from_pixel(200, 200, Luma([255u8]));
    assert_eq!(decode(&DynamicImage::ImageLuma8(blank)), None);
}

#[test]
fn test_decode_empty_image_finds_nothing() {
    let empty = GrayImage::new(0, 0);
    assert_eq!(decode(&DynamicImage::ImageLuma8(empty)), None);
}

#[test]
fn test_reader_capture_reads_png_bytes() {
    let path = write_qr_png("reader_capture", "A1");
    let bytes = fs::read(&path).expect("read png");

    let mut capture = ReaderCapture::new(Cursor::new(bytes), "stdin");
    assert_eq!(capture.source(), "stdin");
    let img = capture.capture().expect("capture");
    assert_eq!(decode(&img).as_deref(), Some("A1"));
}

#[test]
fn test_reader_capture_rejects_non_image_bytes() {
    let mut capture = ReaderCapture::new(Cursor::new(b"not an image".to_vec()), "stdin");
    assert!(capture.capture().is_err());
}

#[test]
fn test_file_capture_missing_file_is_error() {
    let path = temp_out("missing_capture", "png");
    let mut capture = FileCapture::new(&path);
    assert_eq!(capture.source(), path);
    assert!(capture.capture().is_err());
}

#[test]
fn test_scan_image_marks_entry() {
    let path = write_qr_png("scan_entry", "12345");
    let clock = FixedClock::at("2025-08-18 08:55:00").expect("clock");
    let mut ledger = Ledger::with_clock(roster(), clock);

    let result = ScanLogic::scan_image(&mut ledger, &mut FileCapture::new(&path)).expect("scan");
    assert_eq!(
        result,
        ScanResult::Processed {
            payload: "12345".into(),
            outcome: Outcome::EntryMarked {
                name: "Jane".into(),
                branch: "CS".into(),
                at: "2025-08-18 08:55:00".into()
            }
        }
    );
}

#[test]
fn test_scan_image_without_code_touches_nothing() {
    let path = temp_out("scan_blank", "png");
    GrayImage::from_pixel(120, 120, Luma([255u8]))
        .save(&path)
        .expect("save");

    let mut ledger = Ledger::new(roster());
    let result = ScanLogic::scan_image(&mut ledger, &mut FileCapture::new(&path)).expect("scan");

    assert_eq!(result, ScanResult::NoCode);
    assert_eq!(ledger.store().full_reads(), 0);
    assert!(ledger.store().writes().is_empty());
}

#[test]
fn test_scan_image_unknown_payload() {
    let path = write_qr_png("scan_unknown", "99999");
    let mut ledger = Ledger::new(roster());

    let result = ScanLogic::scan_image(&mut ledger, &mut FileCapture::new(&path)).expect("scan");
    assert!(matches!(
        result,
        ScanResult::Processed {
            outcome: Outcome::NotFound { .. },
            ..
        }
    ));
    assert!(ledger.store().writes().is_empty());
}

#[test]
fn test_mark_rejects_blank_input() {
    let mut ledger = Ledger::new(roster());
    assert!(ScanLogic::mark(&mut ledger, "   ").is_err());
    assert_eq!(ledger.store().full_reads(), 0);
}
