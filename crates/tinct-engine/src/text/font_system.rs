use std::fmt;

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

use crate::bitmap::Bitmap;
use crate::coords::Size;
use crate::error::RenderError;

use super::TextRasterizer;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Owns a collection of loaded fonts.
///
/// Fonts are immutable after loading. Rasterization goes through a [`Face`],
/// which borrows one font from the system.
#[derive(Default)]
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        log::debug!("loaded font {:?} as {:?}", font.name(), id);
        self.fonts.push(font);
        Ok(id)
    }

    /// Returns a rasterizer for `id`, if the id is valid.
    pub fn face(&self, id: FontId) -> Option<Face<'_>> {
        self.fonts.get(id.0).map(|font| Face { font })
    }
}

/// A single loaded font, usable as a [`TextRasterizer`].
#[derive(Clone, Copy)]
pub struct Face<'a> {
    font: &'a fontdue::Font,
}

impl TextRasterizer for Face<'_> {
    /// Lays `text` out on one baseline-aligned run (Y down, wrapping only at
    /// explicit newlines) and merges every glyph's coverage into one mask.
    ///
    /// The mask is as wide as the pen advance and as tall as the layout's line
    /// height, so trailing spaces and descenders are kept.
    fn rasterize(&self, text: &str, font_size: f32) -> Result<Bitmap, RenderError> {
        if !(font_size > 0.0 && font_size.is_finite()) {
            return Err(RenderError::Rasterize(format!("invalid font size {font_size}")));
        }

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[self.font], &TextStyle::new(text, font_size, 0));

        let glyphs = layout.glyphs();
        let width = glyphs
            .iter()
            .map(|g| {
                let m = self.font.metrics_indexed(g.key.glyph_index, font_size);
                let pen = g.x - m.xmin as f32 + m.advance_width;
                pen.max(g.x + g.width as f32)
            })
            .fold(0.0f32, f32::max)
            .ceil() as u32;
        let height = if glyphs.is_empty() { 0 } else { layout.height().ceil() as u32 };

        let size = Size::new(width, height);
        if size.is_empty() {
            return Err(RenderError::invalid_size(size));
        }
        let area = size.checked_area().ok_or_else(|| RenderError::too_large(size))?;

        let (w, h) = (size.width as i64, size.height as i64);
        let mut coverage = vec![0u8; area];
        for g in glyphs.iter().filter(|g| g.char_data.rasterize() && g.width > 0 && g.height > 0) {
            let (metrics, glyph) = self.font.rasterize_config(g.key);
            if metrics.width == 0 {
                continue;
            }
            let (ox, oy) = (g.x.round() as i64, g.y.round() as i64);

            for (row, src) in glyph.chunks_exact(metrics.width).enumerate() {
                let y = oy + row as i64;
                if !(0..h).contains(&y) {
                    continue;
                }
                for (col, &a) in src.iter().enumerate() {
                    let x = ox + col as i64;
                    if !(0..w).contains(&x) {
                        continue;
                    }
                    let dst = &mut coverage[(y * w + x) as usize];
                    // Overlapping glyphs (kerning, combining marks) keep the stronger coverage.
                    *dst = (*dst).max(a);
                }
            }
        }

        log::trace!("rasterized {:?} at {font_size}px into {size}", text);
        Bitmap::from_coverage(size, &coverage)
    }
}
