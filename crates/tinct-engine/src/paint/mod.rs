//! Color and gradient generation.
//!
//! Scope:
//! - straight-alpha color math and byte conversion
//! - two-color gradients (horizontal, vertical, diagonal, radial) rendered to bitmaps

pub mod color;
pub mod gradient;

pub use color::Color;
pub use gradient::{generate_gradient, GradientMode, GradientSpec};
