//! Gradient × glyph-mask compositing.

use crate::bitmap::Bitmap;
use crate::error::RenderError;

/// Masks `gradient` with the alpha channel of `mask`.
///
/// Output RGB is the gradient's RGB unchanged. Output alpha is
/// `round(gradient.a * mask.a / 255)`, so it never exceeds either input alpha
/// and is `0` wherever the mask is fully transparent. Neither input is modified.
pub fn composite_with_mask(gradient: &Bitmap, mask: &Bitmap) -> Result<Bitmap, RenderError> {
    if gradient.size() != mask.size() {
        return Err(RenderError::SizeMismatch { gradient: gradient.size(), mask: mask.size() });
    }

    let mut out = gradient.clone();
    for (px, m) in out.pixels_mut().iter_mut().zip(mask.pixels()) {
        px[3] = mul_alpha(px[3], m[3]);
    }

    log::trace!("composited {} glyph mask", out.size());
    Ok(out)
}

/// `round(a * b / 255)` in integer arithmetic, ties rounding up.
#[inline]
fn mul_alpha(a: u8, b: u8) -> u8 {
    ((2 * a as u32 * b as u32 + 255) / 510) as u8
}
