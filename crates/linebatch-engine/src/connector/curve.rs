use crate::coords::{IntRect, IntVec2, Vec2};

/// Number of knots in a connector curve.
pub const CONNECTOR_POINTS: usize = 5;

/// Lower bound for the x component of the bend direction.
const MIN_X_DIR: f32 = 0.3;
/// Fraction of the connector length used as bend length.
const BEND_FRACTION: f32 = 0.2;
const MIN_BEND_LEN: f32 = 20.0;
const MAX_BEND_LEN: f32 = 100.0;
/// Vertical bend is flattened relative to horizontal.
const BEND_Y_SCALE: f32 = 0.4;

/// Box geometry shared by connector handles.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ConnectorLayout {
    /// Handle box size in pixels.
    pub box_size: IntVec2,
    /// Texel rect used for both handle boxes and the line texture.
    pub box_rect: IntRect,
}

impl Default for ConnectorLayout {
    fn default() -> Self {
        Self {
            box_size: IntVec2::new(16, 16),
            box_rect: IntRect::new(84, 87, 85, 88),
        }
    }
}

impl ConnectorLayout {
    #[inline]
    pub fn half_box(&self) -> IntVec2 {
        self.box_size / 2
    }
}

/// Connector anchor for a parent at `parent_pos` with `parent_size`: right
/// edge, one and a half boxes up from the bottom.
pub fn connector_anchor(parent_pos: IntVec2, parent_size: IntVec2, layout: &ConnectorLayout) -> IntVec2 {
    let box_y = layout.box_size.y;
    parent_pos + IntVec2::new(parent_size.x, parent_size.y - box_y - box_y / 2)
}

/// Five curve knots from `start` to `end`.
///
/// Knots 1 and 3 are pushed out from the ends along the start→end direction,
/// with its x component forced to at least 0.3 so the curve always leaves
/// rightwards. Knot 2 is their midpoint.
pub fn connector_points(start: IntVec2, end: IntVec2) -> [IntVec2; CONNECTOR_POINTS] {
    let p0 = Vec2::from(start);
    let p4 = Vec2::from(end);
    let dir = p4 - p0;

    let mut dir_n = dir.normalize_or_zero();
    if dir_n.x < MIN_X_DIR {
        dir_n.x = MIN_X_DIR;
    }
    let bend = (dir.length() * BEND_FRACTION).clamp(MIN_BEND_LEN, MAX_BEND_LEN);
    let offset = Vec2::new(dir_n.x * bend, dir_n.y * bend * BEND_Y_SCALE);

    let p1 = (p0 + offset).trunc_to_int();
    let p3 = (p4 - offset).trunc_to_int();
    let p2 = (p1 + p3) / 2;

    [start, p1, p2, p3, end]
}
