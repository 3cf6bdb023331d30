// Pure sizing helpers shared by the DOM glue.

/// Backing-store size in device pixels for a CSS box, never zero.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> (u32, u32) {
    let dpr = if device_pixel_ratio > 0.0 {
        device_pixel_ratio
    } else {
        1.0
    };
    let w = (css_width * dpr).max(0.0) as u32;
    let h = (css_height * dpr).max(0.0) as u32;
    (w.max(1), h.max(1))
}

/// Clamp a measured size so aspect ratios and viewport divisions stay finite.
#[inline]
pub fn at_least_one(width: f64, height: f64) -> (f64, f64) {
    let fix = |v: f64| if v.is_finite() && v >= 1.0 { v } else { 1.0 };
    (fix(width), fix(height))
}
