//! Capture adapters: the interchangeable front ends that produce a still
//! image for the decoder.

use crate::errors::AppResult;
use image::DynamicImage;
use std::io::Read;
use std::path::{Path, PathBuf};

pub trait Capture {
    /// Where the image comes from, for user messages.
    fn source(&self) -> String;

    fn capture(&mut self) -> AppResult<DynamicImage>;
}

/// An image file on disk (photo upload, camera snapshot folder, ...).
pub struct FileCapture {
    path: PathBuf,
}

impl FileCapture {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Capture for FileCapture {
    fn source(&self) -> String {
        self.path.display().to_string()
    }

    fn capture(&mut self) -> AppResult<DynamicImage> {
        Ok(image::open(&self.path)?)
    }
}

/// Encoded image bytes from any reader, e.g. stdin fed by a camera tool.
pub struct ReaderCapture<R: Read> {
    reader: R,
    label: String,
}

impl<R: Read> ReaderCapture<R> {
    pub fn new(reader: R, label: &str) -> Self {
        Self {
            reader,
            label: label.to_string(),
        }
    }
}

impl<R: Read> Capture for ReaderCapture<R> {
    fn source(&self) -> String {
        self.label.clone()
    }

    fn capture(&mut self) -> AppResult<DynamicImage> {
        let mut bytes = Vec::new();
        self.reader.read_to_end(&mut bytes)?;
        Ok(image::load_from_memory(&bytes)?)
    }
}
