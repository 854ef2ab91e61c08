use core::ops::Mul;

/// Straight-alpha RGBA color with components nominally in `[0, 1]`.
///
/// Packed into vertex data as `0xAABBGGRR` (see [`Color::to_packed`]), which is
/// the byte order UI vertex shaders read as `Unorm8x4`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);
    pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0, 1.0);
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Packs into `0xAABBGGRR`.
    ///
    /// Each channel is scaled by 255, truncated and clamped to `0..=255`.
    #[inline]
    pub fn to_packed(self) -> u32 {
        let ch = |v: f32| -> u32 { ((v * 255.0) as i32).clamp(0, 255) as u32 };
        (ch(self.a) << 24) | (ch(self.b) << 16) | (ch(self.g) << 8) | ch(self.r)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

/// Scales every channel, alpha included.
impl Mul<f32> for Color {
    type Output = Color;
    #[inline]
    fn mul(self, rhs: f32) -> Color {
        Color::new(self.r * rhs, self.g * rhs, self.b * rhs, self.a * rhs)
    }
}
