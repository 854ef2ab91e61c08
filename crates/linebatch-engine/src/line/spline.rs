use crate::coords::Vec2;

/// Catmull-Rom curve passing through every knot.
///
/// The knot list is padded so the curve starts at the first knot and ends at
/// the last one:
/// - open curve: first and last knots are duplicated
/// - closed curve (first == last): padded with the second-to-last and second
///   knots so the loop closes with a smooth tangent
///
/// `t ∈ [0, 1]` is spread uniformly over knot spans, not over arc length.
#[derive(Debug, Clone, PartialEq)]
pub struct CatmullRom {
    padded: Vec<Vec2>,
}

impl CatmullRom {
    pub fn full_curve(knots: &[Vec2]) -> Self {
        let n = knots.len();
        let mut padded = Vec::with_capacity(n + 2);

        if n > 1 {
            let (head, tail) = if knots[0] != knots[n - 1] {
                (knots[0], knots[n - 1])
            } else {
                (knots[n - 2], knots[1])
            };
            padded.push(head);
            padded.extend_from_slice(knots);
            padded.push(tail);
        }

        Self { padded }
    }

    /// Number of knot spans the curve covers.
    #[inline]
    pub fn span_count(&self) -> usize {
        self.padded.len().saturating_sub(3)
    }

    /// Point at `t`; `None` when built from fewer than two knots.
    pub fn point(&self, t: f32) -> Option<Vec2> {
        let spans = self.span_count();
        if spans == 0 {
            return None;
        }
        if t >= 1.0 {
            return Some(self.padded[self.padded.len() - 2]);
        }

        let scaled = t.max(0.0) * spans as f32;
        // Float rounding can push `scaled` onto `spans` for t just below 1.
        let origin = (scaled as usize).min(spans - 1);
        let local = scaled - origin as f32;

        let k = &self.padded[origin..origin + 4];
        Some(catmull_rom(k[0], k[1], k[2], k[3], local))
    }

    /// `count` points at `t = i / count` for `i = 1..=count`.
    ///
    /// The start of the curve (`t = 0`) is not included; callers prepend the
    /// first knot themselves. `count == 0` yields no points.
    pub fn sample_uniform(&self, count: usize) -> Vec<Vec2> {
        if count == 0 || self.span_count() == 0 {
            return Vec::new();
        }
        let total = count as f32;
        (1..=count).filter_map(|i| self.point(i as f32 / total)).collect()
    }
}

fn catmull_rom(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let t2 = t * t;
    let t3 = t2 * t;
    (2.0 * p1
        + (-p0 + p2) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
        * 0.5
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn v(x: f32, y: f32) -> Vec2 { Vec2::new(x, y) }

    fn assert_near(a: Vec2, b: Vec2) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-3);
        assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-3);
    }

    #[test]
    fn passes_through_every_knot() {
        let knots = [v(0.0, 0.0), v(10.0, 5.0), v(20.0, -5.0), v(30.0, 0.0)];
        let curve = CatmullRom::full_curve(&knots);
        assert_eq!(curve.span_count(), 3);

        for (i, k) in knots.iter().enumerate() {
            let t = i as f32 / 3.0;
            assert_near(curve.point(t).unwrap(), *k);
        }
    }

    #[test]
    fn end_of_curve_is_last_knot() {
        let knots = [v(0.0, 0.0), v(5.0, 5.0), v(9.0, 1.0)];
        let curve = CatmullRom::full_curve(&knots);
        assert_eq!(curve.point(1.0), Some(v(9.0, 1.0)));
        assert_eq!(curve.point(2.0), Some(v(9.0, 1.0)));
    }

    #[test]
    fn two_knots_give_straight_segment() {
        let curve = CatmullRom::full_curve(&[v(0.0, 0.0), v(10.0, 0.0)]);
        let mid = curve.point(0.5).unwrap();
        assert_abs_diff_eq!(mid.y, 0.0);
        assert_abs_diff_eq!(mid.x, 5.0, epsilon = 1e-4);
    }

    #[test]
    fn closed_curve_uses_wrapped_padding() {
        let knots = [v(0.0, 0.0), v(10.0, 0.0), v(10.0, 10.0), v(0.0, 0.0)];
        let curve = CatmullRom::full_curve(&knots);
        assert_eq!(curve.padded.first(), Some(&v(10.0, 10.0)));
        assert_eq!(curve.padded.last(), Some(&v(10.0, 0.0)));
    }

    #[test]
    fn single_knot_has_no_curve() {
        let curve = CatmullRom::full_curve(&[v(1.0, 1.0)]);
        assert!(curve.point(0.5).is_none());
        assert!(curve.sample_uniform(8).is_empty());
    }

    #[test]
    fn sample_count_is_exact() {
        let curve = CatmullRom::full_curve(&[v(0.0, 0.0), v(4.0, 4.0), v(8.0, 0.0)]);
        assert_eq!(curve.sample_uniform(12).len(), 12);
        assert!(curve.sample_uniform(0).is_empty());
    }

    #[test]
    fn samples_stay_finite_just_below_one() {
        let curve = CatmullRom::full_curve(&[v(0.0, 0.0), v(4.0, 4.0), v(8.0, 0.0)]);
        let p = curve.point(1.0 - f32::EPSILON).unwrap();
        assert!(p.is_finite());
    }
}
