//! Decoder adapter: still image in, optional QR payload out.

pub mod capture;

use image::DynamicImage;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Mutex, PoisonError};

/// Serializes panic-hook swaps so concurrent decodes restore the right hook.
static HOOK_LOCK: Mutex<()> = Mutex::new(());

/// Decode the first readable QR code in `image`.
///
/// Grids are tried in detection order and the first non-empty payload
/// wins. Any failure, including a panic inside the QR library, is treated
/// as "no code found"; such a panic prints nothing.
pub fn decode(image: &DynamicImage) -> Option<String> {
    let luma = image.to_luma8();
    let (width, height) = luma.dimensions();
    if width == 0 || height == 0 {
        return None;
    }

    quietly(|| {
        let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
            width as usize,
            height as usize,
            |x, y| luma.get_pixel(x as u32, y as u32).0[0],
        );

        prepared
            .detect_grids()
            .iter()
            .filter_map(|grid| grid.decode().ok())
            .map(|(_meta, content)| content)
            .find(|content| !content.is_empty())
    })
    .flatten()
}

/// Run `f`, turning a panic into `None` without the default panic report.
fn quietly<T>(f: impl FnOnce() -> T) -> Option<T> {
    let _guard = HOOK_LOCK.lock().unwrap_or_else(PoisonError::into_inner);

    let previous = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let result = panic::catch_unwind(AssertUnwindSafe(f));
    panic::set_hook(previous);

    result.ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quietly_turns_panics_into_none() {
        assert_eq!(quietly::<u8>(|| panic!("broken grid")), None);
        assert_eq!(quietly(|| 7), Some(7));
    }
}
