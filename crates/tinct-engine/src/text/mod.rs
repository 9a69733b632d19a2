//! Text rasterization.
//!
//! Glyph shaping is not done here: the engine only needs a coverage mask for a
//! string at a pixel size, which [`TextRasterizer`] describes. [`FontSystem`]
//! provides the fontdue-backed implementation.

mod font_system;

pub use font_system::{Face, FontId, FontLoadError, FontSystem};

use crate::bitmap::Bitmap;
use crate::error::RenderError;

/// Source of glyph masks.
///
/// The returned bitmap's alpha channel is the glyph coverage; its RGB is not
/// used by the compositor.
pub trait TextRasterizer {
    fn rasterize(&self, text: &str, font_size: f32) -> Result<Bitmap, RenderError>;
}
