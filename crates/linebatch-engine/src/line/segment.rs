use crate::coords::Vec2;

/// Offset rectangle covering one line segment.
///
/// `a`/`c` sit on the leading edge (segment start), `b`/`d` on the trailing
/// edge (segment end). `a`/`b` lie on one side of the centerline, `c`/`d` on
/// the other. Triangles are `(a, b, d)` and `(a, d, c)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quad {
    pub a: Vec2,
    pub b: Vec2,
    pub c: Vec2,
    pub d: Vec2,
}

impl Quad {
    #[inline]
    pub const fn new(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> Self {
        Self { a, b, c, d }
    }

    /// Quad around `v0 → v1`, offset by `half_width` along the normal of `dir`.
    ///
    /// `dir` must be a unit vector; it is passed separately so zero-length
    /// segments can borrow a neighbour's direction.
    #[inline]
    pub fn from_segment(v0: Vec2, v1: Vec2, dir: Vec2, half_width: f32) -> Self {
        let n = dir.perp() * half_width;
        Self {
            a: v0 - n,
            b: v1 - n,
            c: v0 + n,
            d: v1 + n,
        }
    }

    /// Unit direction of the `a → b` edge, zero when the edge is degenerate.
    #[inline]
    pub fn edge_direction(&self) -> Vec2 {
        (self.b - self.a).normalize_or_zero()
    }

    #[inline]
    pub fn corners(&self) -> [Vec2; 4] {
        [self.a, self.b, self.c, self.d]
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.corners().iter().all(|p| p.is_finite())
    }
}

/// Builds one quad per consecutive pair in `path`.
///
/// Zero-length segments take the direction of the nearest earlier segment,
/// or the nearest later one when none precedes them. A path with no
/// measurable segment at all yields no quads.
pub fn build_quads(path: &[Vec2], half_width: f32, out: &mut Vec<Quad>) {
    out.clear();
    if path.len() < 2 {
        return;
    }

    let mut dirs: Vec<Option<Vec2>> = path.windows(2).map(|w| (w[1] - w[0]).try_normalize()).collect();

    let Some(first_valid) = dirs.iter().flatten().copied().next() else {
        log::warn!("line path of {} points has no non-zero segment; nothing to build", path.len());
        return;
    };

    let mut carry = first_valid;
    for dir in dirs.iter_mut() {
        match dir {
            Some(d) => carry = *d,
            None => *dir = Some(carry),
        }
    }

    out.reserve(dirs.len());
    for (w, dir) in path.windows(2).zip(dirs) {
        out.push(Quad::from_segment(w[0], w[1], dir.unwrap_or(first_valid), half_width));
    }
}
