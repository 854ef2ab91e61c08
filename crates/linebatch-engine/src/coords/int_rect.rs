use super::IntVec2;

/// Integer rectangle stored as edges (`left`, `top`, `right`, `bottom`).
///
/// Used both for texture source rects (texel edges) and for batch scissor rects
/// (inclusive pixel bounds of the emitted geometry).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct IntRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl IntRect {
    pub const ZERO: IntRect = IntRect::new(0, 0, 0, 0);

    /// Covers every representable pixel; intersecting with it is a no-op.
    pub const UNBOUNDED: IntRect = IntRect::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX);

    #[inline]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    #[inline]
    pub fn width(self) -> i64 {
        self.right as i64 - self.left as i64
    }

    #[inline]
    pub fn height(self) -> i64 {
        self.bottom as i64 - self.top as i64
    }

    /// True when the rect spans no area (`right <= left` or `bottom <= top`).
    #[inline]
    pub fn is_empty(self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }

    /// Smallest rect containing all `points`; `None` for an empty iterator.
    pub fn bounding<I>(points: I) -> Option<IntRect>
    where
        I: IntoIterator<Item = IntVec2>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let init = IntRect::new(first.x, first.y, first.x, first.y);
        Some(iter.fold(init, |r, p| {
            IntRect::new(r.left.min(p.x), r.top.min(p.y), r.right.max(p.x), r.bottom.max(p.y))
        }))
    }

    /// Overlap of two rects, edges inclusive.
    ///
    /// Scissor rects are inclusive pixel bounds, so a rect with `left == right`
    /// still covers one pixel column; only inverted results return `None`.
    #[inline]
    pub fn intersect(self, other: IntRect) -> Option<IntRect> {
        let r = IntRect::new(
            self.left.max(other.left),
            self.top.max(other.top),
            self.right.min(other.right),
            self.bottom.min(other.bottom),
        );
        if r.left > r.right || r.top > r.bottom { None } else { Some(r) }
    }
}
