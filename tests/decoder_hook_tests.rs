//! Kept in its own test binary: it installs a process-wide panic hook.

mod common;
use common::qr_image;
use image::DynamicImage;
use rattend::decoder::decode;
use std::panic;
use std::sync::atomic::{AtomicUsize, Ordering};

static HOOK_CALLS: AtomicUsize = AtomicUsize::new(0);

#[test]
fn test_decode_restores_the_callers_panic_hook() {
    panic::set_hook(Box::new(|_| {
        HOOK_CALLS.fetch_add(1, Ordering::SeqCst);
    }));

    let img = DynamicImage::ImageLuma8(qr_image("A1"));
    assert_eq!(decode(&img).as_deref(), Some("A1"));
    assert_eq!(HOOK_CALLS.load(Ordering::SeqCst), 0);

    let caught = panic::catch_unwind(|| panic!("after decode"));
    assert!(caught.is_err());
    assert_eq!(HOOK_CALLS.load(Ordering::SeqCst), 1);

    drop(panic::take_hook());
}
