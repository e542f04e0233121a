use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::scan::ScanLogic;
use crate::decoder::capture::{Capture, FileCapture, ReaderCapture};
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::ui::report::render_scan;
use std::io;

/// Scan one image (file or stdin) and mark entry/exit.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Scan { image, .. } = cmd {
        // clap guarantees exactly one of --image / --stdin
        let mut capture: Box<dyn Capture> = match image {
            Some(path) => Box::new(FileCapture::new(path)),
            None => Box::new(ReaderCapture::new(io::stdin().lock(), "stdin")),
        };

        // open the roster before touching the image: a dead store stops here
        let mut ledger = open_ledger(cfg)?;

        info(format!("Scanning for QR code in {}…", capture.source()));
        let result = ScanLogic::scan_image(&mut ledger, capture.as_mut())?;
        render_scan(&result);
    }

    Ok(())
}
