/// 8-bit sRGB color as written to the output surface.
///
/// Channels are always within `[0, 255]`; constructors from wider values clamp.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0, 0, 0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }

    #[inline]
    pub const fn gray(v: u8) -> Self {
        Self::new(v, v, v)
    }

    /// Creates a color from integer channels, clamping each to `[0, 255]`.
    #[inline]
    pub fn clamped(r: i32, g: i32, b: i32) -> Self {
        Self {
            r: r.clamp(0, 255) as u8,
            g: g.clamp(0, 255) as u8,
            b: b.clamp(0, 255) as u8,
        }
    }

    /// Multiplies every channel by `factor`, clamped to `[0, 1]`.
    ///
    /// NaN factors produce black.
    #[inline]
    pub fn scaled(self, factor: f32) -> Self {
        let f = if factor.is_nan() { 0.0 } else { factor.clamp(0.0, 1.0) };
        let ch = |c: u8| (c as f32 * f).floor() as i32;
        Self::clamped(ch(self.r), ch(self.g), ch(self.b))
    }

    /// Opaque RGBA bytes.
    #[inline]
    pub const fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}
