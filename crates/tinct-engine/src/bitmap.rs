//! Owned RGBA8 pixel buffer.
//!
//! Row-major, 4 bytes per pixel in `R, G, B, A` order, straight (not
//! premultiplied) alpha. A `Bitmap` is never empty: every constructor rejects a
//! zero width or height.

use crate::coords::Size;
use crate::error::RenderError;

/// Bytes per RGBA8 pixel.
pub const BYTES_PER_PIXEL: usize = 4;

#[derive(Clone, PartialEq, Eq)]
pub struct Bitmap {
    size: Size,
    data: Vec<u8>,
}

impl Bitmap {
    /// Creates a fully transparent bitmap.
    pub fn new(size: Size) -> Result<Self, RenderError> {
        let len = byte_len(size)?;
        Ok(Self { size, data: vec![0; len] })
    }

    /// Wraps an existing RGBA8 buffer.
    pub fn from_rgba8(size: Size, data: Vec<u8>) -> Result<Self, RenderError> {
        let expected = byte_len(size)?;
        if data.len() != expected {
            return Err(RenderError::BufferLength { expected, actual: data.len() });
        }
        Ok(Self { size, data })
    }

    /// Builds a glyph-style mask from a single-channel coverage map.
    ///
    /// RGB is white and alpha is the coverage byte, which is the layout text
    /// rasterizers hand to the compositor.
    pub fn from_coverage(size: Size, coverage: &[u8]) -> Result<Self, RenderError> {
        let expected = byte_len(size)? / BYTES_PER_PIXEL;
        if coverage.len() != expected {
            return Err(RenderError::BufferLength { expected, actual: coverage.len() });
        }
        let data = coverage.iter().flat_map(|&a| [255, 255, 255, a]).collect();
        Ok(Self { size, data })
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.size.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.size.height
    }

    /// Raw RGBA8 bytes, row-major.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// The byte buffer viewed as `[r, g, b, a]` pixels.
    #[inline]
    pub fn pixels(&self) -> &[[u8; 4]] {
        bytemuck::cast_slice(&self.data)
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [[u8; 4]] {
        bytemuck::cast_slice_mut(&mut self.data)
    }

    /// Returns the pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        let idx = y as usize * self.size.width as usize + x as usize;
        Some(self.pixels()[idx])
    }

    /// Alpha bytes in pixel order.
    pub fn alpha_channel(&self) -> Vec<u8> {
        self.pixels().iter().map(|p| p[3]).collect()
    }

    /// Copy with rows in reverse order, for display layers with a bottom-up origin.
    pub fn flipped_vertical(&self) -> Self {
        let row = self.size.width as usize * BYTES_PER_PIXEL;
        let data = self.data.chunks_exact(row).rev().flatten().copied().collect();
        Self { size: self.size, data }
    }
}

/// Validated RGBA8 buffer length for `size`.
fn byte_len(size: Size) -> Result<usize, RenderError> {
    if size.is_empty() {
        return Err(RenderError::invalid_size(size));
    }
    size.rgba8_len().ok_or_else(|| RenderError::too_large(size))
}

impl std::fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bitmap").field("size", &self.size).finish_non_exhaustive()
    }
}
