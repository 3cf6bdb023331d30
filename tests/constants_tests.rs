// Host-side tests for page wiring constants and sizing helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod layout {
    include!("../src/layout.rs");
}

use constants::*;
use layout::*;

#[test]
fn element_ids_are_distinct() {
    let ids = [CANVAS_ID, ENV_IMAGE_ID, COPY_BUTTON_ID, ADDRESS_ID, YEAR_ID];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn copied_label_restores_after_two_seconds() {
    assert_eq!(COPY_RESTORE_MS, 2000);
    assert_eq!(COPIED_LABEL, "Copied!");
}

#[test]
fn canvas_sits_behind_page_content() {
    assert!(CANVAS_STYLE.contains("position:fixed"));
    assert!(CANVAS_STYLE.contains("z-index:-1"));
}

#[test]
fn backing_size_scales_by_device_pixel_ratio() {
    assert_eq!(backing_size(800.0, 600.0, 2.0), (1600, 1200));
    assert_eq!(backing_size(800.0, 600.0, 1.5), (1200, 900));
}

#[test]
fn backing_size_never_zero() {
    assert_eq!(backing_size(0.0, 0.0, 1.0), (1, 1));
    assert_eq!(backing_size(-5.0, 10.0, 1.0), (1, 10));
}

#[test]
fn non_positive_ratio_falls_back_to_one() {
    assert_eq!(backing_size(300.0, 200.0, 0.0), (300, 200));
    assert_eq!(backing_size(300.0, 200.0, -2.0), (300, 200));
}

#[test]
fn measured_sizes_clamp_to_one() {
    assert_eq!(at_least_one(1024.0, 768.0), (1024.0, 768.0));
    assert_eq!(at_least_one(0.0, f64::NAN), (1.0, 1.0));
    assert_eq!(at_least_one(0.5, 2.0), (1.0, 2.0));
}
