use core::ops::Index;

use crate::coords::{IntVec2, Vec2};

use super::{CatmullRom, LineError, LineType};

/// Ordered integer points defining a line skeleton.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointBuffer {
    points: Vec<IntVec2>,
}

impl PointBuffer {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, p: IntVec2) {
        self.points.push(p);
    }

    #[inline]
    pub fn extend_from_slice(&mut self, points: &[IntVec2]) {
        self.points.extend_from_slice(points);
    }

    /// Replaces the point at `index`.
    pub fn set(&mut self, index: usize, p: IntVec2) -> Result<(), LineError> {
        let len = self.points.len();
        let slot = self
            .points
            .get_mut(index)
            .ok_or(LineError::IndexOutOfRange { index, len })?;
        *slot = p;
        Ok(())
    }

    /// Clears points. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.points.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[IntVec2] {
        &self.points
    }

    /// Points as floats, unchanged.
    pub fn straight_path(&self) -> Vec<Vec2> {
        self.points.iter().copied().map(Vec2::from).collect()
    }

    /// `points_per_segment * len()` samples along a curve through all points.
    ///
    /// The first point itself is not part of the samples.
    pub fn curve_samples(&self, points_per_segment: usize) -> Vec<Vec2> {
        let knots = self.straight_path();
        CatmullRom::full_curve(&knots).sample_uniform(points_per_segment * knots.len())
    }

    /// Path the segment builder walks for `line_type`.
    ///
    /// Curves start at the first point followed by the curve samples. With
    /// zero samples the curve path is empty.
    pub fn path(&self, line_type: LineType, points_per_segment: usize) -> Vec<Vec2> {
        match line_type {
            LineType::Straight => self.straight_path(),
            LineType::Curve => {
                let samples = self.curve_samples(points_per_segment);
                let Some(&first) = self.points.first() else { return Vec::new() };
                if samples.is_empty() {
                    return Vec::new();
                }
                let mut path = Vec::with_capacity(samples.len() + 1);
                path.push(Vec2::from(first));
                path.extend(samples);
                path
            }
        }
    }
}

impl Index<usize> for PointBuffer {
    type Output = IntVec2;
    #[inline]
    fn index(&self, index: usize) -> &IntVec2 {
        &self.points[index]
    }
}

impl From<&[IntVec2]> for PointBuffer {
    fn from(points: &[IntVec2]) -> Self {
        Self { points: points.to_vec() }
    }
}
