use std::fmt;
use std::str::FromStr;

use crate::bitmap::Bitmap;
use crate::coords::{Size, Vec2};
use crate::error::{ParseNameError, RenderError};

use super::Color;

/// Interpolation function applied across the bitmap.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum GradientMode {
    /// Left to right, constant down each column.
    Horizontal,
    /// Top to bottom, constant along each row.
    Vertical,
    /// Top-left corner to bottom-right corner.
    #[default]
    Diagonal,
    /// Center outwards to the farthest corner.
    Radial,
}

impl GradientMode {
    pub const ALL: [GradientMode; 4] = [
        GradientMode::Horizontal,
        GradientMode::Vertical,
        GradientMode::Diagonal,
        GradientMode::Radial,
    ];

    pub fn name(self) -> &'static str {
        match self {
            GradientMode::Horizontal => "horizontal",
            GradientMode::Vertical => "vertical",
            GradientMode::Diagonal => "diagonal",
            GradientMode::Radial => "radial",
        }
    }

    /// Like [`FromStr`], but unknown names fall back to [`GradientMode::Diagonal`].
    pub fn parse_or_default(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            log::debug!("unknown gradient mode {name:?}, using diagonal");
            GradientMode::default()
        })
    }
}

impl fmt::Display for GradientMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GradientMode {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        GradientMode::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseNameError::new("gradient mode", s))
    }
}

/// Full description of a two-color gradient bitmap.
///
/// `from` is the color at `t = 0` and `to` the color at `t = 1`. Their role
/// depends on the mode:
///
/// | mode       | `from` | `to`   |
/// |------------|--------|--------|
/// | Horizontal | left   | right  |
/// | Vertical   | top    | bottom |
/// | Diagonal   | start  | end    |
/// | Radial     | center | border |
///
/// Use the role-named constructors rather than filling the fields by hand.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GradientSpec {
    pub mode: GradientMode,
    pub size: Size,
    pub from: Color,
    pub to: Color,
}

impl GradientSpec {
    pub fn horizontal(size: Size, left: Color, right: Color) -> Self {
        Self { mode: GradientMode::Horizontal, size, from: left, to: right }
    }

    pub fn vertical(size: Size, top: Color, bottom: Color) -> Self {
        Self { mode: GradientMode::Vertical, size, from: top, to: bottom }
    }

    pub fn diagonal(size: Size, start: Color, end: Color) -> Self {
        Self { mode: GradientMode::Diagonal, size, from: start, to: end }
    }

    pub fn radial(size: Size, center: Color, border: Color) -> Self {
        Self { mode: GradientMode::Radial, size, from: center, to: border }
    }

    /// Maps a label's `(start, end)` color pair onto the mode's roles.
    ///
    /// Radial labels paint `start` on the border and `end` in the center; the
    /// three linear modes run from `start` to `end`.
    pub fn for_label(mode: GradientMode, size: Size, start: Color, end: Color) -> Self {
        match mode {
            GradientMode::Horizontal => Self::horizontal(size, start, end),
            GradientMode::Vertical => Self::vertical(size, start, end),
            GradientMode::Diagonal => Self::diagonal(size, start, end),
            GradientMode::Radial => Self::radial(size, end, start),
        }
    }

    /// Interpolation factor in `[0, 1]` at pixel `(x, y)`.
    pub fn factor_at(&self, x: u32, y: u32) -> f32 {
        self.sampler().factor(x, y)
    }

    fn sampler(&self) -> Sampler {
        let Size { width, height } = self.size;
        match self.mode {
            GradientMode::Horizontal => Sampler::Horizontal { width },
            GradientMode::Vertical => Sampler::Vertical { height },
            GradientMode::Diagonal => Sampler::Diagonal { width, height },
            GradientMode::Radial => {
                let center = Vec2::new(
                    width.saturating_sub(1) as f32 / 2.0,
                    height.saturating_sub(1) as f32 / 2.0,
                );
                // Pixel centers sit on integer coordinates, so every corner is
                // `center.length()` away from the center.
                Sampler::Radial { center, max_r: center.length() }
            }
        }
    }
}

/// Mode geometry resolved once per bitmap.
#[derive(Debug, Copy, Clone)]
enum Sampler {
    Horizontal { width: u32 },
    Vertical { height: u32 },
    Diagonal { width: u32, height: u32 },
    Radial { center: Vec2, max_r: f32 },
}

impl Sampler {
    #[inline]
    fn factor(self, x: u32, y: u32) -> f32 {
        match self {
            Sampler::Horizontal { width } => axis_factor(x, width),
            Sampler::Vertical { height } => axis_factor(y, height),
            Sampler::Diagonal { width, height } => {
                (axis_factor(x, width) + axis_factor(y, height)) / 2.0
            }
            Sampler::Radial { center, max_r } => {
                if max_r <= 0.0 {
                    return 0.0;
                }
                let r = Vec2::new(x as f32, y as f32).distance(center);
                (r / max_r).clamp(0.0, 1.0)
            }
        }
    }
}

/// `i / (len - 1)`, or `0` for a single-pixel axis.
#[inline]
fn axis_factor(i: u32, len: u32) -> f32 {
    if len <= 1 { 0.0 } else { i as f32 / (len - 1) as f32 }
}

/// Renders `spec` into a new bitmap.
///
/// Pure and deterministic: identical specs always produce identical bytes.
/// Alpha is interpolated like the color channels.
pub fn generate_gradient(spec: &GradientSpec) -> Result<Bitmap, RenderError> {
    let mut bitmap = Bitmap::new(spec.size)?;
    let sampler = spec.sampler();
    let width = spec.size.width as usize;

    for (y, row) in bitmap.pixels_mut().chunks_exact_mut(width).enumerate() {
        for (x, px) in row.iter_mut().enumerate() {
            let t = sampler.factor(x as u32, y as u32);
            *px = Color::lerp(spec.from, spec.to, t).to_rgba8();
        }
    }

    log::trace!("generated {} gradient {}", spec.mode, spec.size);
    Ok(bitmap)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
    const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);
    const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);

    fn px(bmp: &Bitmap, x: u32, y: u32) -> [u8; 4] {
        bmp.pixel(x, y).unwrap()
    }

    // ── horizontal ────────────────────────────────────────────────────────

    #[test]
    fn horizontal_three_columns() {
        let spec = GradientSpec::horizontal(Size::new(3, 1), RED, BLUE);
        let bmp = generate_gradient(&spec).unwrap();
        assert_eq!(px(&bmp, 0, 0), [255, 0, 0, 255]);
        assert_eq!(px(&bmp, 1, 0), [128, 0, 128, 255]);
        assert_eq!(px(&bmp, 2, 0), [0, 0, 255, 255]);
    }

    #[test]
    fn horizontal_is_constant_down_columns() {
        let spec = GradientSpec::horizontal(Size::new(7, 5), RED, GREEN);
        let bmp = generate_gradient(&spec).unwrap();
        for x in 0..7 {
            let top = px(&bmp, x, 0);
            assert!((1..5).all(|y| px(&bmp, x, y) == top));
        }
        assert_eq!(px(&bmp, 0, 4), RED.to_rgba8());
        assert_eq!(px(&bmp, 6, 4), GREEN.to_rgba8());
    }

    #[test]
    fn single_column_uses_start_color() {
        let spec = GradientSpec::horizontal(Size::new(1, 4), RED, BLUE);
        let bmp = generate_gradient(&spec).unwrap();
        assert!(bmp.pixels().iter().all(|p| *p == RED.to_rgba8()));
    }

    // ── vertical ──────────────────────────────────────────────────────────

    #[test]
    fn vertical_endpoints() {
        let spec = GradientSpec::vertical(Size::new(4, 9), GREEN, BLUE);
        let bmp = generate_gradient(&spec).unwrap();
        for x in 0..4 {
            assert_eq!(px(&bmp, x, 0), GREEN.to_rgba8());
            assert_eq!(px(&bmp, x, 8), BLUE.to_rgba8());
        }
        assert_eq!(px(&bmp, 0, 4), px(&bmp, 3, 4));
    }

    // ── diagonal ──────────────────────────────────────────────────────────

    #[test]
    fn diagonal_corners() {
        let spec = GradientSpec::diagonal(Size::new(5, 3), RED, BLUE);
        let bmp = generate_gradient(&spec).unwrap();
        assert_eq!(px(&bmp, 0, 0), RED.to_rgba8());
        assert_eq!(px(&bmp, 4, 2), BLUE.to_rgba8());
        // Opposite corners both sit at t = 0.5.
        assert_eq!(px(&bmp, 4, 0), px(&bmp, 0, 2));
        assert_eq!(px(&bmp, 4, 0), [128, 0, 128, 255]);
    }

    #[test]
    fn diagonal_single_row_only_uses_x() {
        let spec = GradientSpec::diagonal(Size::new(3, 1), RED, BLUE);
        assert_eq!(spec.factor_at(2, 0), 0.5);
        // The y term is 0 on a single row, so the far end stops halfway.
        let bmp = generate_gradient(&spec).unwrap();
        assert_eq!(px(&bmp, 2, 0), [128, 0, 128, 255]);
        let column = GradientSpec::diagonal(Size::new(1, 3), RED, BLUE);
        assert_eq!(column.factor_at(0, 2), 0.5);
    }

    // ── radial ────────────────────────────────────────────────────────────

    #[test]
    fn radial_center_and_corners() {
        let spec = GradientSpec::radial(Size::new(5, 5), RED, BLUE);
        let bmp = generate_gradient(&spec).unwrap();
        assert_eq!(px(&bmp, 2, 2), RED.to_rgba8());
        for (x, y) in [(0, 0), (4, 0), (0, 4), (4, 4)] {
            assert_eq!(px(&bmp, x, y), BLUE.to_rgba8());
        }
    }

    #[test]
    fn radial_corners_on_even_and_non_square_sizes() {
        for size in [Size::new(4, 3), Size::new(6, 2), Size::new(2, 7), Size::new(8, 8)] {
            let spec = GradientSpec::radial(size, RED, BLUE);
            let bmp = generate_gradient(&spec).unwrap();
            let (w, h) = (size.width - 1, size.height - 1);
            for (x, y) in [(0, 0), (w, 0), (0, h), (w, h)] {
                assert_eq!(spec.factor_at(x, y), 1.0, "{size} corner ({x}, {y})");
                assert_eq!(px(&bmp, x, y), BLUE.to_rgba8(), "{size} corner ({x}, {y})");
            }
            // The center falls between pixels, so no pixel reaches the border color early.
            for y in 1..h {
                for x in 1..w {
                    assert!(spec.factor_at(x, y) < 1.0, "{size} ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn radial_even_size_center_pixels_are_symmetric() {
        let spec = GradientSpec::radial(Size::new(4, 4), RED, BLUE);
        let t = spec.factor_at(1, 1);
        assert!(t > 0.0 && t < 0.5);
        for (x, y) in [(2, 1), (1, 2), (2, 2)] {
            assert_eq!(spec.factor_at(x, y), t);
        }
    }

    #[test]
    fn radial_factor_grows_outwards() {
        let spec = GradientSpec::radial(Size::new(9, 9), RED, BLUE);
        let ts: Vec<f32> = (4..9).map(|x| spec.factor_at(x, 4)).collect();
        assert!(ts.windows(2).all(|w| w[0] < w[1]));
        assert!(ts.iter().all(|t| (0.0..=1.0).contains(t)));
    }

    #[test]
    fn radial_single_pixel_is_center_color() {
        let spec = GradientSpec::radial(Size::new(1, 1), RED, BLUE);
        let bmp = generate_gradient(&spec).unwrap();
        assert_eq!(px(&bmp, 0, 0), RED.to_rgba8());
    }

    // ── general ───────────────────────────────────────────────────────────

    #[test]
    fn deterministic_for_every_mode() {
        let from = Color::new(0.3, 0.6, 0.9, 0.7);
        let to = Color::new(0.9, 0.1, 0.2, 0.2);
        for mode in GradientMode::ALL {
            let spec = GradientSpec::for_label(mode, Size::new(31, 17), from, to);
            let a = generate_gradient(&spec).unwrap();
            let b = generate_gradient(&spec).unwrap();
            assert_eq!(a.as_bytes(), b.as_bytes(), "{mode}");
        }
    }

    #[test]
    fn alpha_is_interpolated() {
        let from = Color::new(1.0, 1.0, 1.0, 0.0);
        let to = Color::new(1.0, 1.0, 1.0, 1.0);
        let bmp = generate_gradient(&GradientSpec::horizontal(Size::new(3, 1), from, to)).unwrap();
        assert_eq!(bmp.alpha_channel(), vec![0, 128, 255]);
    }

    #[test]
    fn empty_size_is_invalid() {
        for size in [Size::new(0, 10), Size::new(10, 0), Size::new(0, 0)] {
            let spec = GradientSpec::vertical(size, RED, BLUE);
            assert_eq!(
                generate_gradient(&spec),
                Err(RenderError::InvalidSize { width: size.width, height: size.height })
            );
        }
    }

    #[test]
    fn unallocatable_size_is_an_error() {
        let spec = GradientSpec::horizontal(Size::new(u32::MAX, u32::MAX), Color::WHITE, RED);
        assert_eq!(
            generate_gradient(&spec),
            Err(RenderError::TooLarge { width: u32::MAX, height: u32::MAX })
        );
    }

    #[test]
    fn out_of_range_colors_are_clamped() {
        let hot = Color::new(2.0, -1.0, 0.0, 5.0);
        let bmp = generate_gradient(&GradientSpec::horizontal(Size::new(2, 1), hot, hot)).unwrap();
        assert!(bmp.pixels().iter().all(|p| *p == [255, 0, 0, 255]));
    }

    #[test]
    fn renders_on_parallel_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Bitmap>();
        assert_send_sync::<GradientSpec>();
        assert_send_sync::<Color>();

        let specs: Vec<GradientSpec> = GradientMode::ALL
            .into_iter()
            .map(|mode| GradientSpec::for_label(mode, Size::new(24, 12), RED, BLUE))
            .collect();
        let threaded: Vec<Bitmap> = std::thread::scope(|scope| {
            let handles: Vec<_> = specs
                .iter()
                .map(|spec| scope.spawn(move || generate_gradient(spec).unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        for (spec, bmp) in specs.iter().zip(&threaded) {
            assert_eq!(bmp, &generate_gradient(spec).unwrap());
        }
    }

    // ── label mapping & names ─────────────────────────────────────────────

    #[test]
    fn for_label_swaps_roles_for_radial() {
        let spec = GradientSpec::for_label(GradientMode::Radial, Size::new(3, 3), RED, BLUE);
        assert_eq!(spec.from, BLUE);
        assert_eq!(spec.to, RED);

        let spec = GradientSpec::for_label(GradientMode::Vertical, Size::new(3, 3), RED, BLUE);
        assert_eq!((spec.from, spec.to), (RED, BLUE));
    }

    #[test]
    fn mode_names_parse() {
        assert_eq!("horizontal".parse(), Ok(GradientMode::Horizontal));
        assert_eq!(" Radial ".parse(), Ok(GradientMode::Radial));
        assert!("spiral".parse::<GradientMode>().is_err());
        assert_eq!(GradientMode::parse_or_default("spiral"), GradientMode::Diagonal);
        for mode in GradientMode::ALL {
            assert_eq!(mode.to_string().parse(), Ok(mode));
        }
    }
}
