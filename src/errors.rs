//! Unified application error type.
//! Commands, bootstrap and capture code return AppError; the record store
//! boundary has its own StoreError which converts into AppError.

use crate::store::StoreError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Record store
    // ---------------------------
    #[error("Record store error: {0}")]
    Store(#[from] StoreError),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Operation not supported by this store: {0}")]
    Unsupported(String),

    // ---------------------------
    // Capture / input
    // ---------------------------
    #[error("Cannot read image: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid student ID: {0:?}")]
    InvalidIdentifier(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration: {0}")]
    ConfigSave(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
