use std::fmt;

use crate::coords::Size;

/// Error returned by gradient generation, compositing and rasterization.
///
/// All variants are local and deterministic: retrying with the same input
/// reproduces the same error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A bitmap was requested with a zero width or height.
    InvalidSize { width: u32, height: u32 },
    /// The pixel buffer for a bitmap of this size would not fit in memory.
    TooLarge { width: u32, height: u32 },
    /// Compositor inputs do not share the same dimensions.
    SizeMismatch { gradient: Size, mask: Size },
    /// A raw pixel buffer does not hold exactly `width * height * 4` bytes.
    BufferLength { expected: usize, actual: usize },
    /// The text rasterizer could not produce a glyph mask.
    Rasterize(String),
}

impl RenderError {
    #[inline]
    pub(crate) fn invalid_size(size: Size) -> Self {
        RenderError::InvalidSize { width: size.width, height: size.height }
    }

    #[inline]
    pub(crate) fn too_large(size: Size) -> Self {
        RenderError::TooLarge { width: size.width, height: size.height }
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvalidSize { width, height } => {
                write!(f, "invalid bitmap size {width}x{height}: both dimensions must be > 0")
            }
            RenderError::TooLarge { width, height } => {
                write!(f, "bitmap size {width}x{height} is too large to allocate")
            }
            RenderError::SizeMismatch { gradient, mask } => {
                write!(f, "size mismatch: gradient is {gradient}, mask is {mask}")
            }
            RenderError::BufferLength { expected, actual } => {
                write!(f, "pixel buffer holds {actual} bytes, expected {expected}")
            }
            RenderError::Rasterize(msg) => write!(f, "text rasterization failed: {msg}"),
        }
    }
}

impl std::error::Error for RenderError {}

/// Error returned when parsing a gradient mode or alignment name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNameError {
    /// What was being parsed ("gradient mode", "horizontal alignment", ...).
    pub kind: &'static str,
    pub value: String,
}

impl ParseNameError {
    pub(crate) fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self { kind, value: value.into() }
    }
}

impl fmt::Display for ParseNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: {:?}", self.kind, self.value)
    }
}

impl std::error::Error for ParseNameError {}
