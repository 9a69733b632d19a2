//! Tinct engine crate.
//!
//! Renders text labels filled with a two-color gradient:
//!
//! 1. a [`TextRasterizer`] turns a string into a glyph coverage mask
//! 2. [`generate_gradient`] renders a gradient bitmap of the same size
//! 3. [`composite_with_mask`] keeps the gradient color where the glyphs have coverage
//! 4. [`compute_offset`] aligns the result inside its container
//!
//! [`GradientLabel`] wires these steps together with change tracking, and a
//! [`DisplaySink`] shows the result. All of it is CPU-only and synchronous.

pub mod bitmap;
pub mod canvas;
pub mod composite;
pub mod coords;
pub mod error;
pub mod label;
pub mod layout;
pub mod logging;
pub mod paint;
pub mod text;

pub use bitmap::Bitmap;
pub use canvas::{Canvas, DisplaySink};
pub use composite::composite_with_mask;
pub use error::{ParseNameError, RenderError};
pub use label::{FrameScheduler, GradientLabel, LabelOutput};
pub use layout::{compute_offset, place_in, HAlign, VAlign};
pub use paint::{generate_gradient, Color, GradientMode, GradientSpec};
pub use text::TextRasterizer;
