//! The four-label showcase: one label per gradient mode, stacked vertically.

use tinct_engine::coords::{Rect, Size, Vec2};
use tinct_engine::{Color, FrameScheduler, GradientLabel, GradientMode, HAlign, VAlign};

/// Outer padding and inter-row spacing of the column, in pixels.
pub const PADDING: f32 = 10.0;
pub const SPACING: f32 = 10.0;

struct LabelSpec {
    text: &'static str,
    mode: GradientMode,
    start: Color,
    end: Color,
}

const LABELS: [LabelSpec; 4] = [
    LabelSpec {
        text: "Diagonal Gradient",
        mode: GradientMode::Diagonal,
        start: Color::new(1.0, 0.0, 0.0, 1.0), // red
        end: Color::new(1.0, 1.0, 0.0, 1.0),   // yellow
    },
    LabelSpec {
        text: "Horizontal Gradient",
        mode: GradientMode::Horizontal,
        start: Color::new(0.0, 1.0, 0.0, 1.0), // green
        end: Color::new(0.0, 0.0, 1.0, 1.0),   // blue
    },
    LabelSpec {
        text: "Vertical Gradient",
        mode: GradientMode::Vertical,
        start: Color::new(1.0, 0.0, 1.0, 1.0), // magenta
        end: Color::new(0.0, 1.0, 1.0, 1.0),   // cyan
    },
    LabelSpec {
        text: "Radial Gradient",
        mode: GradientMode::Radial,
        start: Color::new(1.0, 0.5, 0.0, 1.0), // orange
        end: Color::new(0.2, 0.2, 0.8, 1.0),   // bluish
    },
];

/// Splits `area` into `count` equal rows inside `padding`, separated by `spacing`.
pub fn column_rows(area: Size, count: usize, padding: f32, spacing: f32) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let inner_w = (area.width as f32 - 2.0 * padding).max(0.0);
    let inner_h = (area.height as f32 - 2.0 * padding - spacing * (count - 1) as f32).max(0.0);
    let row_h = inner_h / count as f32;

    (0..count)
        .map(|i| {
            let y = padding + i as f32 * (row_h + spacing);
            Rect::from_origin_size(Vec2::new(padding, y), Vec2::new(inner_w, row_h))
        })
        .collect()
}

/// Builds the showcase labels, centered in their rows.
pub fn build_labels<S>(area: Size, font_size: f32, scheduler: S) -> Vec<GradientLabel>
where
    S: FrameScheduler + Clone + 'static,
{
    let rows = column_rows(area, LABELS.len(), PADDING, SPACING);
    LABELS
        .iter()
        .zip(rows)
        .map(|(spec, rect)| {
            GradientLabel::new(spec.text)
                .with_font_size(font_size)
                .with_mode(spec.mode)
                .with_colors(spec.start, spec.end)
                .with_align(HAlign::Center, VAlign::Middle)
                .with_rect(rect)
                .with_scheduler(scheduler.clone())
        })
        .collect()
}
