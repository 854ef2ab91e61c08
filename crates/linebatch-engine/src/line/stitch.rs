use super::Quad;

/// Edge directions whose dot product exceeds this are joined by averaging the
/// shared corners; anything sharper gets a cross quad.
pub const STITCH_DOT_THRESHOLD: f32 = 0.9;

/// One drawable piece of a stitched line.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Piece {
    /// A segment quad, possibly with corners moved by joins.
    Segment(Quad),
    /// Filler at a sharp joint. Corners are `(next.a, prev.b, next.c, prev.d)`,
    /// which makes a self-intersecting bow-tie; that shape is what covers the
    /// wedge on both sides of the joint.
    Cross(Quad),
}

impl Piece {
    #[inline]
    pub fn quad(&self) -> &Quad {
        match self {
            Piece::Segment(q) | Piece::Cross(q) => q,
        }
    }

    #[inline]
    pub fn is_cross(&self) -> bool {
        matches!(self, Piece::Cross(_))
    }
}

/// Joins neighbouring quads in order and returns the pieces to draw.
///
/// Near-parallel neighbours share averaged corners (written back into
/// `quads`); sharper turns keep both quads intact and add a [`Piece::Cross`]
/// between them. Each join only looks at the two quads it connects, but sees
/// corners already moved by the previous join.
pub fn stitch(quads: &mut [Quad]) -> Vec<Piece> {
    let mut pieces = Vec::with_capacity(quads.len() * 2);

    for i in 1..quads.len() {
        let (head, tail) = quads.split_at_mut(i);
        let prev = &mut head[i - 1];
        let next = &mut tail[0];

        let d0 = prev.edge_direction();
        let d1 = next.edge_direction();

        if d0.dot(d1) > STITCH_DOT_THRESHOLD {
            let avg0 = (prev.b + next.a) * 0.5;
            let avg1 = (prev.d + next.c) * 0.5;
            prev.b = avg0;
            next.a = avg0;
            prev.d = avg1;
            next.c = avg1;

            pieces.push(Piece::Segment(*prev));
        } else {
            pieces.push(Piece::Segment(*prev));
            pieces.push(Piece::Cross(Quad::new(next.a, prev.b, next.c, prev.d)));
        }
    }

    if let Some(last) = quads.last() {
        pieces.push(Piece::Segment(*last));
    }

    pieces
}
