//! Gradient-filled text label.
//!
//! A [`GradientLabel`] owns the properties of one label and re-derives its
//! bitmap lazily. Setters only record what changed; the work happens in
//! [`GradientLabel::update`], which the host calls once per frame after a
//! [`FrameScheduler`] asked for one.
//!
//! Two kinds of change are tracked separately:
//! - content (text, font size, mode, colors): rasterize, generate, composite
//! - placement (rect, alignment): recompute the position only
//!
//! Nothing is computed until the label has a non-empty rect.

use crate::bitmap::Bitmap;
use crate::canvas::DisplaySink;
use crate::composite::composite_with_mask;
use crate::coords::{Rect, Vec2};
use crate::error::RenderError;
use crate::layout::{place_in, HAlign, VAlign};
use crate::paint::{generate_gradient, Color, GradientMode, GradientSpec};
use crate::text::TextRasterizer;

/// Asks the host for a frame in which [`GradientLabel::update`] will run.
///
/// Timer, animation-frame and idle callbacks all fit. Labels call this at
/// most once between two updates.
pub trait FrameScheduler {
    fn request_frame(&self);
}

impl<F: Fn()> FrameScheduler for F {
    fn request_frame(&self) {
        self()
    }
}

/// The finished bitmap and where to show it.
#[derive(Debug, Clone)]
pub struct LabelOutput {
    pub bitmap: Bitmap,
    pub position: Vec2,
}

#[derive(Debug, Copy, Clone, Default)]
struct Dirty {
    content: bool,
    placement: bool,
}

pub struct GradientLabel {
    text: String,
    font_size: f32,
    mode: GradientMode,
    start_color: Color,
    end_color: Color,
    halign: HAlign,
    valign: VAlign,
    rect: Rect,

    dirty: Dirty,
    frame_pending: bool,
    scheduler: Option<Box<dyn FrameScheduler>>,
    output: Option<LabelOutput>,
}

impl GradientLabel {
    pub const DEFAULT_FONT_SIZE: f32 = 15.0;
    pub const DEFAULT_START: Color = Color::new(1.0, 0.0, 0.0, 1.0);
    pub const DEFAULT_END: Color = Color::new(0.0, 0.0, 1.0, 1.0);

    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_size: Self::DEFAULT_FONT_SIZE,
            mode: GradientMode::default(),
            start_color: Self::DEFAULT_START,
            end_color: Self::DEFAULT_END,
            halign: HAlign::default(),
            valign: VAlign::default(),
            rect: Rect::default(),
            dirty: Dirty { content: true, placement: true },
            frame_pending: false,
            scheduler: None,
            output: None,
        }
    }

    // ── builder ───────────────────────────────────────────────────────────

    /// Attaches the scheduler. A frame is requested right away since a new
    /// label always has pending work.
    pub fn with_scheduler(mut self, scheduler: impl FrameScheduler + 'static) -> Self {
        self.scheduler = Some(Box::new(scheduler));
        self.frame_pending = false;
        self.request_frame();
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.set_font_size(size);
        self
    }

    pub fn with_mode(mut self, mode: GradientMode) -> Self {
        self.set_mode(mode);
        self
    }

    pub fn with_colors(mut self, start: Color, end: Color) -> Self {
        self.set_colors(start, end);
        self
    }

    pub fn with_align(mut self, halign: HAlign, valign: VAlign) -> Self {
        self.set_halign(halign);
        self.set_valign(valign);
        self
    }

    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.set_rect(rect);
        self
    }

    // ── setters ───────────────────────────────────────────────────────────

    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.text {
            self.text = text;
            self.mark_content();
        }
    }

    pub fn set_font_size(&mut self, size: f32) {
        if size != self.font_size {
            self.font_size = size;
            self.mark_content();
        }
    }

    pub fn set_mode(&mut self, mode: GradientMode) {
        if mode != self.mode {
            self.mode = mode;
            self.mark_content();
        }
    }

    pub fn set_start_color(&mut self, color: Color) {
        if color != self.start_color {
            self.start_color = color;
            self.mark_content();
        }
    }

    pub fn set_end_color(&mut self, color: Color) {
        if color != self.end_color {
            self.end_color = color;
            self.mark_content();
        }
    }

    pub fn set_colors(&mut self, start: Color, end: Color) {
        self.set_start_color(start);
        self.set_end_color(end);
    }

    pub fn set_halign(&mut self, halign: HAlign) {
        if halign != self.halign {
            self.halign = halign;
            self.mark_placement();
        }
    }

    pub fn set_valign(&mut self, valign: VAlign) {
        if valign != self.valign {
            self.valign = valign;
            self.mark_placement();
        }
    }

    /// Sets the container rect. Position and size changes only move the bitmap.
    pub fn set_rect(&mut self, rect: Rect) {
        if rect != self.rect {
            self.rect = rect;
            self.mark_placement();
        }
    }

    // ── getters ───────────────────────────────────────────────────────────

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn mode(&self) -> GradientMode {
        self.mode
    }

    pub fn colors(&self) -> (Color, Color) {
        (self.start_color, self.end_color)
    }

    pub fn align(&self) -> (HAlign, VAlign) {
        (self.halign, self.valign)
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.content || self.dirty.placement
    }

    /// Last successful render, if any.
    pub fn output(&self) -> Option<&LabelOutput> {
        self.output.as_ref()
    }

    // ── frame work ────────────────────────────────────────────────────────

    /// Performs pending work. Returns `Ok(true)` when the output changed.
    ///
    /// While the rect is empty the work stays pending. On error the previous
    /// output is dropped and the pending work is discarded, so an input that
    /// fails is not retried until one of its properties changes.
    pub fn update(&mut self, rasterizer: &dyn TextRasterizer) -> Result<bool, RenderError> {
        self.frame_pending = false;

        if !self.is_dirty() {
            return Ok(false);
        }
        if self.rect.is_empty() {
            log::trace!("label {:?}: waiting for a non-empty rect", self.text);
            return Ok(false);
        }

        let dirty = std::mem::take(&mut self.dirty);

        if dirty.content || self.output.is_none() {
            let bitmap = match self.render(rasterizer) {
                Ok(bitmap) => bitmap,
                Err(e) => {
                    log::warn!("label {:?}: render failed: {e}", self.text);
                    self.output = None;
                    return Err(e);
                }
            };
            let position = self.position_for(&bitmap);
            log::debug!(
                "label {:?}: rendered {} {} at ({}, {})",
                self.text,
                self.mode,
                bitmap.size(),
                position.x,
                position.y
            );
            self.output = Some(LabelOutput { bitmap, position });
        } else if let Some(out) = self.output.take() {
            let position = self.position_for(&out.bitmap);
            self.output = Some(LabelOutput { position, ..out });
        }

        Ok(true)
    }

    /// Presents the last output, if any.
    pub fn paint(&self, sink: &mut dyn DisplaySink) {
        if let Some(out) = &self.output {
            sink.present(&out.bitmap, out.position);
        }
    }

    fn render(&self, rasterizer: &dyn TextRasterizer) -> Result<Bitmap, RenderError> {
        let mask = rasterizer.rasterize(&self.text, self.font_size)?;
        let spec = GradientSpec::for_label(self.mode, mask.size(), self.start_color, self.end_color);
        let gradient = generate_gradient(&spec)?;
        composite_with_mask(&gradient, &mask)
    }

    fn position_for(&self, bitmap: &Bitmap) -> Vec2 {
        place_in(self.rect, self.halign, self.valign, bitmap.size().to_vec2())
    }

    fn mark_content(&mut self) {
        self.dirty.content = true;
        self.request_frame();
    }

    fn mark_placement(&mut self) {
        self.dirty.placement = true;
        self.request_frame();
    }

    /// Coalesces: only the first change after an update reaches the scheduler.
    fn request_frame(&mut self) {
        if self.frame_pending {
            return;
        }
        if let Some(scheduler) = &self.scheduler {
            self.frame_pending = true;
            scheduler.request_frame();
        }
    }
}

impl std::fmt::Debug for GradientLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GradientLabel")
            .field("text", &self.text)
            .field("font_size", &self.font_size)
            .field("mode", &self.mode)
            .field("rect", &self.rect)
            .field("dirty", &self.dirty)
            .finish_non_exhaustive()
    }
}
