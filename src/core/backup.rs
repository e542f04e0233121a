use crate::config::Config;
use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::store::StoreKind;
use crate::ui::messages::{success, warning};
use crate::utils::fs::ensure_writable;
use rusqlite::Connection;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the roster file (CSV or SQLite) to `dest_file`, optionally
    /// zipped. Returns the path actually written.
    pub fn backup(cfg: &Config, dest_file: &str, compress: bool, force: bool) -> AppResult<PathBuf> {
        let src = cfg.store_path();
        let dest = Path::new(dest_file);

        if !dest.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Backup file path must be absolute: {dest_file}"
            ))));
        }

        // 1️⃣ Check roster exists
        if !src.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Roster not found: {}", src.display()),
            )
            .into());
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        let final_target = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };
        ensure_writable(&final_target, force)?;

        // 3️⃣ Copy or compress
        if compress {
            compress_into(&src, &final_target)?;
        } else {
            fs::copy(&src, &final_target)?;
        }
        success(format!("Backup created: {}", final_target.display()));

        // 4️⃣ Audit in the roster database, when it has one
        if StoreKind::for_path(&src) == StoreKind::Sqlite {
            let logged = Connection::open(&src).and_then(|conn| {
                ttlog(
                    &conn,
                    "backup",
                    &final_target.to_string_lossy(),
                    if compress {
                        "Backup created and compressed"
                    } else {
                        "Backup created"
                    },
                )
            });
            if let Err(e) = logged {
                warning(format!("Failed to write internal log: {}", e));
            }
        }

        Ok(final_target)
    }
}

/// Zip `src` into `zip_path` under its own file name.
fn compress_into(src: &Path, zip_path: &Path) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let name = src
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "roster".to_string());

    let mut f = fs::File::open(src)?;
    zip.start_file(name, options).map_err(io::Error::other)?;

    io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    Ok(())
}
