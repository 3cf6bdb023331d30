// Host-side tests for renderer helpers that need no GPU.

use hexfield_core::render::helpers::{rgba_len, PLACEHOLDER_TEXEL};

#[test]
fn rgba_len_counts_four_bytes_per_texel() {
    assert_eq!(rgba_len(1, 1), PLACEHOLDER_TEXEL.len());
    assert_eq!(rgba_len(256, 128), 256 * 128 * 4);
    assert_eq!(rgba_len(0, 512), 0);
}

#[test]
#[cfg(target_pointer_width = "64")]
fn rgba_len_does_not_wrap_for_huge_images() {
    // 40000 * 40000 * 4 overflows u32
    assert_eq!(rgba_len(40_000, 40_000), 6_400_000_000);
}
