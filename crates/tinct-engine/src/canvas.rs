//! CPU display target for finished bitmaps.

use crate::bitmap::Bitmap;
use crate::coords::{Size, Vec2};
use crate::error::RenderError;
use crate::paint::Color;

/// Anything that can show a finished bitmap at a position.
///
/// The engine never manages the display itself; window toolkits, texture
/// uploaders and the software [`Canvas`] all sit behind this trait.
pub trait DisplaySink {
    fn present(&mut self, bitmap: &Bitmap, position: Vec2);
}

/// Software RGBA8 surface with straight-alpha source-over blending.
#[derive(Debug, Clone)]
pub struct Canvas {
    target: Bitmap,
}

impl Canvas {
    /// Creates a transparent canvas.
    pub fn new(size: Size) -> Result<Self, RenderError> {
        Ok(Self { target: Bitmap::new(size)? })
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.target.size()
    }

    /// Overwrites every pixel with `color`.
    pub fn fill(&mut self, color: Color) {
        let rgba = color.to_rgba8();
        self.target.pixels_mut().fill(rgba);
    }

    #[inline]
    pub fn as_bitmap(&self) -> &Bitmap {
        &self.target
    }

    #[inline]
    pub fn into_bitmap(self) -> Bitmap {
        self.target
    }
}

impl DisplaySink for Canvas {
    /// Blends `bitmap` with its top-left corner at `position` (rounded to the
    /// nearest pixel). Parts outside the canvas are clipped.
    fn present(&mut self, bitmap: &Bitmap, position: Vec2) {
        if !position.is_finite() {
            log::warn!("canvas: dropping bitmap at non-finite position {position:?}");
            return;
        }

        let (ox, oy) = (position.x.round() as i64, position.y.round() as i64);
        let Some((cols, dst_x)) = clip_span(ox, bitmap.width(), self.target.width()) else {
            return;
        };
        let Some((rows, dst_y)) = clip_span(oy, bitmap.height(), self.target.height()) else {
            return;
        };

        let src_w = bitmap.width() as usize;
        let dst_w = self.target.width() as usize;
        let src = bitmap.pixels();
        let dst = self.target.pixels_mut();

        for (i, row) in rows.enumerate() {
            let src_row = &src[row * src_w..][cols.clone()];
            let start = (dst_y + i) * dst_w + dst_x;
            for (d, s) in dst[start..start + src_row.len()].iter_mut().zip(src_row) {
                *d = source_over(*s, *d);
            }
        }
    }
}

/// Visible part of a `len`-pixel span placed at `origin` on a `limit`-pixel axis.
///
/// Returns the source index range and the destination start, or `None` when
/// nothing is visible. Saturates, so any `origin` is accepted.
fn clip_span(origin: i64, len: u32, limit: u32) -> Option<(std::ops::Range<usize>, usize)> {
    let start = 0i64.saturating_sub(origin).clamp(0, len as i64);
    let end = (limit as i64).saturating_sub(origin).clamp(0, len as i64);
    if start >= end {
        return None;
    }
    let dst = origin.saturating_add(start) as usize;
    Some((start as usize..end as usize, dst))
}

/// Straight-alpha `src` over `dst`.
#[inline]
fn source_over(src: [u8; 4], dst: [u8; 4]) -> [u8; 4] {
    match src[3] {
        0 => return dst,
        255 => return src,
        _ => {}
    }

    let sa = src[3] as f32 / 255.0;
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);

    let channel = |s: u8, d: u8| {
        let c = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a;
        c.round().clamp(0.0, 255.0) as u8
    };

    [
        channel(src[0], dst[0]),
        channel(src[1], dst[1]),
        channel(src[2], dst[2]),
        (out_a * 255.0).round() as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dot(rgba: [u8; 4]) -> Bitmap {
        Bitmap::from_rgba8(Size::new(1, 1), rgba.to_vec()).unwrap()
    }

    // ── blending ──────────────────────────────────────────────────────────

    #[test]
    fn source_over_extremes() {
        assert_eq!(source_over([1, 2, 3, 0], [9, 9, 9, 255]), [9, 9, 9, 255]);
        assert_eq!(source_over([1, 2, 3, 255], [9, 9, 9, 255]), [1, 2, 3, 255]);
    }

    #[test]
    fn source_over_half_on_opaque() {
        assert_eq!(source_over([255, 0, 0, 128], [0, 0, 255, 255]), [128, 0, 127, 255]);
    }

    #[test]
    fn source_over_onto_transparent_keeps_color() {
        assert_eq!(source_over([200, 100, 50, 64], [0, 0, 0, 0]), [200, 100, 50, 64]);
    }

    // ── present ───────────────────────────────────────────────────────────

    #[test]
    fn present_places_at_rounded_position() {
        let mut canvas = Canvas::new(Size::new(4, 4)).unwrap();
        canvas.present(&dot([10, 20, 30, 255]), Vec2::new(1.6, 2.4));
        let out = canvas.into_bitmap();
        assert_eq!(out.pixel(2, 2), Some([10, 20, 30, 255]));
        assert_eq!(out.alpha_channel().iter().filter(|&&a| a != 0).count(), 1);
    }

    #[test]
    fn present_clips_outside() {
        let mut canvas = Canvas::new(Size::new(2, 2)).unwrap();
        let block = Bitmap::from_coverage(Size::new(3, 3), &[255; 9]).unwrap();
        canvas.present(&block, Vec2::new(-2.0, -2.0));
        let alpha = canvas.as_bitmap().alpha_channel();
        assert_eq!(alpha, vec![255, 0, 0, 0]);

        canvas.present(&block, Vec2::new(50.0, 0.0));
        assert_eq!(canvas.as_bitmap().alpha_channel(), alpha);
    }

    #[test]
    fn present_far_away_is_a_no_op() {
        let mut canvas = Canvas::new(Size::new(3, 3)).unwrap();
        let block = Bitmap::from_coverage(Size::new(2, 2), &[255; 4]).unwrap();
        for pos in [
            Vec2::new(0.0, 1e30),
            Vec2::new(-1e30, 0.0),
            Vec2::new(f32::MAX, f32::MAX),
            Vec2::new(f32::MIN, 1.0),
            Vec2::new(3.0, 0.0),
            Vec2::new(0.0, -2.0),
        ] {
            canvas.present(&block, pos);
        }
        assert!(canvas.as_bitmap().alpha_channel().iter().all(|&a| a == 0));
    }

    #[test]
    fn clip_span_ranges() {
        assert_eq!(clip_span(-2, 3, 2), Some((2..3, 0)));
        assert_eq!(clip_span(1, 3, 2), Some((0..1, 1)));
        assert_eq!(clip_span(0, 3, 10), Some((0..3, 0)));
        assert_eq!(clip_span(i64::MAX, 3, 10), None);
        assert_eq!(clip_span(i64::MIN, 3, 10), None);
    }

    #[test]
    fn fill_then_present_blends() {
        let mut canvas = Canvas::new(Size::new(1, 1)).unwrap();
        canvas.fill(Color::WHITE);
        canvas.present(&dot([0, 0, 0, 0]), Vec2::zero());
        assert_eq!(canvas.as_bitmap().pixel(0, 0), Some([255, 255, 255, 255]));
    }
}
