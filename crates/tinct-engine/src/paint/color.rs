/// Straight-alpha RGBA color with `f32` channels in `[0, 1]`.
///
/// Values outside `[0, 1]` are accepted and clamped at the point of use, so a
/// bad channel never turns into an error. Non-finite channels clamp to `0`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from straight RGBA bytes (`0`–`255`).
    #[inline]
    pub fn from_rgba8([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Clamps every channel to `[0, 1]`.
    #[inline]
    pub fn clamped(self) -> Self {
        Self::new(clamp_unit(self.r), clamp_unit(self.g), clamp_unit(self.b), clamp_unit(self.a))
    }

    /// Per-channel linear interpolation `a + (b - a) * t`, with `t` clamped to `[0, 1]`.
    #[inline]
    pub fn lerp(a: Color, b: Color, t: f32) -> Color {
        let t = clamp_unit(t);
        let a = a.clamped();
        let b = b.clamped();
        Color::new(
            a.r + (b.r - a.r) * t,
            a.g + (b.g - a.g) * t,
            a.b + (b.b - a.b) * t,
            a.a + (b.a - a.a) * t,
        )
    }

    /// Converts to RGBA bytes: clamp to `[0, 1]`, scale, round to nearest.
    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        [unit_to_u8(self.r), unit_to_u8(self.g), unit_to_u8(self.b), unit_to_u8(self.a)]
    }
}

#[inline]
fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

#[inline]
fn unit_to_u8(v: f32) -> u8 {
    (clamp_unit(v) * 255.0).round() as u8
}
