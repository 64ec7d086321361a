//! Aspect-ratio converters.
//!
//! Both converters take the native height first, then the native width,
//! then the known dimension. They never fault: a zero argument yields `0`.
//!
//! The ratio is divided first and the product truncated, all in `f64`.
//! This can land one pixel away from integer `target * a / b` for some
//! inputs, and downstream rounding drift depends on it.

use num_traits::Float;

/// Width of a `native_width × native_height` image scaled to `target_height`.
///
/// ```
/// use zenjustify::aspect::width_for_height;
///
/// assert_eq!(width_for_height(100, 200, 100), 200);
/// assert_eq!(width_for_height(0, 200, 100), 0);
/// ```
pub fn width_for_height(native_height: u32, native_width: u32, target_height: u32) -> u32 {
    scale(native_width, native_height, target_height)
}

/// Height of a `native_width × native_height` image scaled to `target_width`.
///
/// ```
/// use zenjustify::aspect::height_for_width;
///
/// assert_eq!(height_for_width(100, 200, 100), 50);
/// assert_eq!(height_for_width(100, 200, 0), 0);
/// ```
pub fn height_for_width(native_height: u32, native_width: u32, target_width: u32) -> u32 {
    scale(native_height, native_width, target_width)
}

/// `floor(target * (numer / denom))`, or `0` if any input is zero.
fn scale(numer: u32, denom: u32, target: u32) -> u32 {
    if numer == 0 || denom == 0 || target == 0 {
        return 0;
    }
    floor_to_u32(target as f64 * (numer as f64 / denom as f64))
}

/// Truncate a non-negative `f64` to `u32`, saturating at the bounds.
pub(crate) fn floor_to_u32(value: f64) -> u32 {
    Float::floor(value) as u32
}
