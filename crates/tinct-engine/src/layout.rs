//! Placement of a rendered bitmap inside a container rectangle.

use std::fmt;
use std::str::FromStr;

use crate::coords::{Rect, Vec2};
use crate::error::ParseNameError;

/// Horizontal alignment of content inside its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical alignment of content inside its container.
///
/// `Top` means offset `0` in the top-left-origin space used by [`crate::coords`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

impl HAlign {
    pub fn name(self) -> &'static str {
        match self {
            HAlign::Left => "left",
            HAlign::Center => "center",
            HAlign::Right => "right",
        }
    }

    /// Offset along the horizontal axis for content of width `content` in a container of width `container`.
    #[inline]
    pub fn offset(self, container: f32, content: f32) -> f32 {
        match self {
            HAlign::Left => 0.0,
            HAlign::Center => (container - content) / 2.0,
            HAlign::Right => container - content,
        }
    }
}

impl VAlign {
    pub fn name(self) -> &'static str {
        match self {
            VAlign::Top => "top",
            VAlign::Middle => "middle",
            VAlign::Bottom => "bottom",
        }
    }

    #[inline]
    pub fn offset(self, container: f32, content: f32) -> f32 {
        match self {
            VAlign::Top => 0.0,
            VAlign::Middle => (container - content) / 2.0,
            VAlign::Bottom => container - content,
        }
    }
}

impl fmt::Display for HAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for VAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HAlign {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [HAlign::Left, HAlign::Center, HAlign::Right]
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseNameError::new("horizontal alignment", s))
    }
}

impl FromStr for VAlign {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [VAlign::Top, VAlign::Middle, VAlign::Bottom]
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseNameError::new("vertical alignment", s))
    }
}

/// Top-left offset of `content` inside `container`.
///
/// Content larger than the container yields negative offsets (it overflows
/// on the far side, or on both sides when centered).
#[inline]
pub fn compute_offset(halign: HAlign, valign: VAlign, container: Vec2, content: Vec2) -> Vec2 {
    Vec2::new(halign.offset(container.x, content.x), valign.offset(container.y, content.y))
}

/// Absolute top-left position of `content` aligned inside `rect`.
#[inline]
pub fn place_in(rect: Rect, halign: HAlign, valign: VAlign, content: Vec2) -> Vec2 {
    rect.origin + compute_offset(halign, valign, rect.size, content)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTAINER: Vec2 = Vec2::new(100.0, 50.0);
    const CONTENT: Vec2 = Vec2::new(40.0, 10.0);

    #[test]
    fn every_alignment_pair() {
        let cases = [
            (HAlign::Left, VAlign::Top, (0.0, 0.0)),
            (HAlign::Center, VAlign::Top, (30.0, 0.0)),
            (HAlign::Right, VAlign::Top, (60.0, 0.0)),
            (HAlign::Left, VAlign::Middle, (0.0, 20.0)),
            (HAlign::Center, VAlign::Middle, (30.0, 20.0)),
            (HAlign::Right, VAlign::Bottom, (60.0, 40.0)),
        ];
        for (h, v, (x, y)) in cases {
            assert_eq!(compute_offset(h, v, CONTAINER, CONTENT), Vec2::new(x, y), "{h}/{v}");
        }
    }

    #[test]
    fn exact_fit_is_zero_for_all() {
        for h in [HAlign::Left, HAlign::Center, HAlign::Right] {
            for v in [VAlign::Top, VAlign::Middle, VAlign::Bottom] {
                assert_eq!(compute_offset(h, v, CONTAINER, CONTAINER), Vec2::zero());
            }
        }
    }

    #[test]
    fn oversized_content_goes_negative() {
        let off = compute_offset(HAlign::Center, VAlign::Bottom, Vec2::new(10.0, 10.0), Vec2::new(20.0, 14.0));
        assert_eq!(off, Vec2::new(-5.0, -4.0));
    }

    #[test]
    fn place_in_adds_rect_origin() {
        let rect = Rect::from_origin_size(Vec2::new(10.0, 200.0), CONTAINER);
        let pos = place_in(rect, HAlign::Center, VAlign::Middle, CONTENT);
        assert_eq!(pos, Vec2::new(40.0, 220.0));
    }

    #[test]
    fn names_parse() {
        assert_eq!("center".parse(), Ok(HAlign::Center));
        assert_eq!("RIGHT".parse(), Ok(HAlign::Right));
        assert_eq!("middle".parse(), Ok(VAlign::Middle));
        assert!("justify".parse::<HAlign>().is_err());
        assert!("baseline".parse::<VAlign>().is_err());
    }
}
