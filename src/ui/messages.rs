//! Icon-prefixed status lines shown at the kiosk.
//!
//! Errors go to stderr so a kiosk wrapper can tell failed scans apart from
//! normal output.

use ansi_term::{Colour, Style};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn style(self) -> Style {
        match self {
            Level::Info => Colour::Blue.bold(),
            Level::Success => Colour::Green.bold(),
            Level::Warning => Colour::Yellow.bold(),
            Level::Error => Colour::Red.bold(),
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }
}

fn line<T: fmt::Display>(level: Level, msg: T) -> String {
    format!("{} {}", level.style().paint(level.icon()), msg)
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(Level::Info, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(Level::Success, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(Level::Warning, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(Level::Error, msg));
}

/// Section banner, e.g. above the kiosk session summary.
pub fn header<T: fmt::Display>(msg: T) {
    let banner = format!("====================== {}", msg);
    println!("{}\n", Level::Info.style().paint(banner));
}
