use crate::batch::{BlendMode, TextureHandle};
use crate::coords::IntRect;
use crate::paint::CornerColors;

/// Samples per input point used by curve lines unless configured otherwise.
pub const DEFAULT_POINTS_PER_CURVE_SEGMENT: usize = 8;

/// How the point list is turned into a path.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum LineType {
    /// Points are connected directly.
    #[default]
    Straight,
    /// Points are knots of a Catmull-Rom curve that is resampled before
    /// segmenting.
    Curve,
}

/// Everything that persists across builds of a [`LineBatcher`](super::LineBatcher).
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub line_type: LineType,
    /// Half of the drawn line width, in pixels.
    pub pixel_size: f32,
    pub blend_mode: BlendMode,
    pub colors: CornerColors,
    pub texture: Option<TextureHandle>,
    /// Texel rect inside `texture` mapped across every quad.
    pub source_rect: IntRect,
    /// Curve samples per input point (`Curve` only).
    pub points_per_segment: usize,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            line_type: LineType::Straight,
            pixel_size: 1.0,
            blend_mode: BlendMode::Replace,
            colors: CornerColors::default(),
            texture: None,
            source_rect: IntRect::ZERO,
            points_per_segment: 0,
        }
    }
}
