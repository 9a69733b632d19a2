use super::Vec2;

/// Integer pixel dimensions of a bitmap.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero. No bitmap can be built from an empty size.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Pixel count (`width * height`), or `None` if it does not fit in `usize`.
    #[inline]
    pub const fn checked_area(self) -> Option<usize> {
        (self.width as usize).checked_mul(self.height as usize)
    }

    /// Byte length of an RGBA8 buffer of this size, or `None` on overflow.
    #[inline]
    pub const fn rgba8_len(self) -> Option<usize> {
        match self.checked_area() {
            Some(area) => area.checked_mul(4),
            None => None,
        }
    }

    #[inline]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

impl core::fmt::Display for Size {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
