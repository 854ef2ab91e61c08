use super::Color;

/// Corner of a textured quad, named after the texture-space corner it samples.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Per-corner tint for line quads.
///
/// Quad corners map as `a` → top-left, `b` → top-right, `c` → bottom-left and
/// `d` → bottom-right, the same mapping used for UVs.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerColors {
    pub top_left: Color,
    pub top_right: Color,
    pub bottom_left: Color,
    pub bottom_right: Color,
}

impl CornerColors {
    #[inline]
    pub const fn new(top_left: Color, top_right: Color, bottom_left: Color, bottom_right: Color) -> Self {
        Self { top_left, top_right, bottom_left, bottom_right }
    }

    /// Same color on all four corners.
    #[inline]
    pub const fn all(c: Color) -> Self {
        Self { top_left: c, top_right: c, bottom_left: c, bottom_right: c }
    }

    #[inline]
    pub fn get(&self, corner: Corner) -> Color {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomLeft => self.bottom_left,
            Corner::BottomRight => self.bottom_right,
        }
    }

    #[inline]
    pub fn set(&mut self, corner: Corner, color: Color) {
        match corner {
            Corner::TopLeft => self.top_left = color,
            Corner::TopRight => self.top_right = color,
            Corner::BottomLeft => self.bottom_left = color,
            Corner::BottomRight => self.bottom_right = color,
        }
    }
}
