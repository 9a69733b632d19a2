//! Coordinate and geometry types shared by the gradient, placement and canvas code.
//!
//! Canonical space:
//! - pixels
//! - origin top-left
//! - +X right, +Y down

mod rect;
mod size;
mod vec2;

pub use rect::Rect;
pub use size::Size;
pub use vec2::Vec2;
