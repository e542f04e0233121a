#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use image::{GrayImage, Luma};
use rattend::store::{Column, RecordStore, SqliteSheet};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const HEADER: [&str; 7] = [
    "ID",
    "Name",
    "Branch",
    "EntryStatus",
    "EntryTime",
    "ExitStatus",
    "ExitTime",
];

/// The binary, with HOME pointed at a scratch dir so no real config is read.
pub fn rat() -> Command {
    let home = env::temp_dir().join("rattend_test_home");
    fs::create_dir_all(&home).ok();
    let mut cmd = cargo_bin_cmd!("rattend");
    cmd.env("HOME", home);
    cmd
}

/// Unique roster path inside the system temp dir; any previous file is removed.
pub fn setup_test_store(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattend.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Temporary output file path, removed if present.
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a CSV roster with the standard header.
pub fn write_roster_csv(path: &str, rows: &[[&str; 7]]) {
    let mut wtr = csv::Writer::from_path(path).expect("create csv");
    wtr.write_record(HEADER).expect("header");
    for r in rows {
        wtr.write_record(r).expect("row");
    }
    wtr.flush().expect("flush");
}

/// Small roster used by many CLI tests.
pub fn init_csv_roster(path: &str) {
    write_roster_csv(
        path,
        &[
            ["A1", "Jane", "CS", "", "", "", ""],
            ["2025001", "Ravi", "ECE", "", "", "", ""],
            ["2025002", "Meena", "MECH", "Entered", "2025-08-18 09:01:00", "", ""],
        ],
    );
}

/// Create a SQLite roster through the library API.
pub fn init_sqlite_roster(path: &str) -> SqliteSheet {
    let mut sheet = SqliteSheet::create(std::path::Path::new(path)).expect("create db");
    sheet.insert("A1".to_string(), "Jane", "CS").expect("insert");
    sheet.insert(2025001i64, "Ravi", "ECE").expect("insert");
    let row = sheet
        .insert("2025002".to_string(), "Meena", "MECH")
        .expect("insert");
    sheet
        .write_cell(row, Column::EntryStatus, "Entered")
        .expect("status");
    sheet
        .write_cell(row, Column::EntryTime, "2025-08-18 09:01:00")
        .expect("time");
    sheet
}

/// Render `payload` as a clean QR image: 10px modules, 4-module quiet zone.
pub fn qr_image(payload: &str) -> GrayImage {
    let code = qrcode::QrCode::new(payload.as_bytes()).expect("encode qr");
    let width = code.width();
    let colors = code.to_colors();

    let scale = 10u32;
    let quiet = 4u32;
    let side = (width as u32 + 2 * quiet) * scale;

    GrayImage::from_fn(side, side, |x, y| {
        let mx = (x / scale) as i64 - quiet as i64;
        let my = (y / scale) as i64 - quiet as i64;
        let inside = mx >= 0 && my >= 0 && (mx as usize) < width && (my as usize) < width;
        if inside && colors[my as usize * width + mx as usize] == qrcode::Color::Dark {
            Luma([0u8])
        } else {
            Luma([255u8])
        }
    })
}

/// Save a QR image for `payload` as PNG and return its path.
pub fn write_qr_png(name: &str, payload: &str) -> String {
    let path = temp_out(name, "png");
    qr_image(payload).save(&path).expect("save png");
    path
}
