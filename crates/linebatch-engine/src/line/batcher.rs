use crate::batch::{BlendMode, TextureHandle, UiBatch, UiVertex};
use crate::coords::{IntRect, IntVec2};
use crate::paint::{Color, Corner, CornerColors};

use super::{build_quads, stitch, LineError, LineStyle, LineType, PointBuffer, Quad, QuadEmitter};

/// Builds batched geometry for one line.
///
/// Each build runs `points → path → quads → stitch → emit` to completion and
/// replaces all previous output. Only the [`LineStyle`] carries over between
/// builds.
///
/// # Example
/// ```rust,ignore
/// let mut line = LineBatcher::new();
/// line.set_line_texture(texture, IntRect::new(84, 87, 85, 88));
/// line.set_line_pixel_size(4.0);
/// line.draw_points(&[IntVec2::new(0, 0), IntVec2::new(100, 40)])?;
/// line.get_batches(&mut frame_batches, &mut frame_vertices, IntRect::UNBOUNDED);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LineBatcher {
    style: LineStyle,
    points: PointBuffer,
    quads: Vec<Quad>,
    vertex_data: Vec<f32>,
    batches: Vec<UiBatch>,
}

impl LineBatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: LineStyle) -> Self {
        Self { style, ..Self::default() }
    }

    // ── configuration ─────────────────────────────────────────────────────

    #[inline]
    pub fn style(&self) -> &LineStyle {
        &self.style
    }

    pub fn set_line_type(&mut self, line_type: LineType) {
        self.style.line_type = line_type;
    }

    /// Sets texture and source rect together.
    pub fn set_line_texture(&mut self, texture: TextureHandle, source_rect: IntRect) {
        self.style.texture = Some(texture);
        self.style.source_rect = source_rect;
    }

    /// Replaces the texture, keeping the current source rect.
    pub fn set_texture(&mut self, texture: TextureHandle) {
        self.style.texture = Some(texture);
    }

    pub fn set_line_rect(&mut self, source_rect: IntRect) {
        self.style.source_rect = source_rect;
    }

    /// Half of the drawn line width, in pixels.
    pub fn set_line_pixel_size(&mut self, pixel_size: f32) {
        self.style.pixel_size = pixel_size;
    }

    pub fn set_blend_mode(&mut self, mode: BlendMode) {
        self.style.blend_mode = mode;
    }

    pub fn set_num_points_per_segment(&mut self, n: usize) {
        self.style.points_per_segment = n;
    }

    /// Tints all four corners with `color`.
    pub fn set_color(&mut self, color: Color) {
        self.style.colors = CornerColors::all(color);
    }

    pub fn set_corner_color(&mut self, corner: Corner, color: Color) {
        self.style.colors.set(corner, color);
    }

    /// Readiness check: texture and source rect are usable.
    pub fn validate_texture(&self) -> bool {
        QuadEmitter::new(&self.style).is_ok()
    }

    // ── points ────────────────────────────────────────────────────────────

    #[inline]
    pub fn points(&self) -> &[IntVec2] {
        self.points.as_slice()
    }

    pub fn add_point(&mut self, p: IntVec2) {
        self.points.push(p);
    }

    pub fn add_points(&mut self, points: &[IntVec2]) {
        self.points.extend_from_slice(points);
    }

    /// Moves an existing point; call [`build`](Self::build) to refresh output.
    pub fn set_point(&mut self, index: usize, p: IntVec2) -> Result<(), LineError> {
        self.points.set(index, p)
    }

    pub fn clear_point_list(&mut self) {
        self.points.clear();
    }

    /// Drops quads, vertices and batches from the last build.
    pub fn clear_batches(&mut self) {
        self.quads.clear();
        self.vertex_data.clear();
        self.batches.clear();
    }

    /// Drops points and all built output.
    pub fn clear(&mut self) {
        self.clear_point_list();
        self.clear_batches();
    }

    // ── build ─────────────────────────────────────────────────────────────

    /// Replaces the point list with `points` and builds.
    pub fn draw_points(&mut self, points: &[IntVec2]) -> Result<(), LineError> {
        self.clear();
        self.add_points(points);
        self.build()
    }

    /// Builds geometry from the current points and style.
    ///
    /// Previous output is dropped first, so a failed build leaves no batches.
    pub fn build(&mut self) -> Result<(), LineError> {
        self.clear_batches();

        if self.points.len() < 2 {
            return Err(LineError::NotEnoughPoints { count: self.points.len() });
        }
        let pixel_size = self.style.pixel_size;
        if !pixel_size.is_finite() || pixel_size < 0.0 {
            return Err(LineError::InvalidPixelSize(pixel_size));
        }
        let emitter = QuadEmitter::new(&self.style)?;

        let line_type = self.style.line_type;
        let per_segment = self.style.points_per_segment;
        if line_type == LineType::Curve && per_segment == 0 {
            log::warn!("curve line with 0 points per segment; nothing to build");
            return Ok(());
        }

        let path = self.points.path(line_type, per_segment);
        build_quads(&path, pixel_size, &mut self.quads);

        let pieces = stitch(&mut self.quads);
        for piece in &pieces {
            emitter.emit(piece, &mut self.vertex_data, &mut self.batches);
        }

        log::debug!(
            "line build: {:?}, {} points -> {} quads, {} pieces, {} batches",
            line_type,
            self.points.len(),
            self.quads.len(),
            pieces.len(),
            self.batches.len()
        );
        Ok(())
    }

    // ── output ────────────────────────────────────────────────────────────

    /// Quads from the last build, with stitched corners.
    #[inline]
    pub fn quads(&self) -> &[Quad] {
        &self.quads
    }

    #[inline]
    pub fn batches(&self) -> &[UiBatch] {
        &self.batches
    }

    /// Raw float stream; batch ranges index into this.
    #[inline]
    pub fn vertex_data(&self) -> &[f32] {
        &self.vertex_data
    }

    #[inline]
    pub fn vertices(&self) -> &[UiVertex] {
        UiVertex::from_floats(&self.vertex_data)
    }

    /// Copies built batches into a caller-owned frame buffer.
    ///
    /// Vertex ranges are re-based onto the end of `vertex_data`, scissors are
    /// intersected with `clip` and batches are merged into `batches` with the
    /// usual rule. Batches entirely outside `clip` are skipped. Internal
    /// output is left untouched.
    pub fn get_batches(&self, batches: &mut Vec<UiBatch>, vertex_data: &mut Vec<f32>, clip: IntRect) {
        for batch in &self.batches {
            let Some(scissor) = batch.scissor.intersect(clip) else { continue };

            let start = vertex_data.len();
            vertex_data.extend_from_slice(&self.vertex_data[batch.range()]);

            let rebased = UiBatch {
                scissor,
                vertex_start: start,
                vertex_end: vertex_data.len(),
                ..*batch
            };
            UiBatch::add_or_merge(rebased, batches);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::{TextureId, UI_VERTEX_SIZE};
    use crate::coords::Vec2;

    const TEXTURE: TextureHandle = TextureHandle::new(TextureId(3), 256, 256);

    fn p(x: i32, y: i32) -> IntVec2 { IntVec2::new(x, y) }

    fn batcher(line_type: LineType, width: f32) -> LineBatcher {
        let mut b = LineBatcher::new();
        b.set_line_texture(TEXTURE, IntRect::new(84, 87, 85, 88));
        b.set_line_type(line_type);
        b.set_line_pixel_size(width);
        b.set_num_points_per_segment(4);
        b
    }

    // ── preconditions ─────────────────────────────────────────────────────

    #[test]
    fn fewer_than_two_points_is_an_error() {
        let mut b = batcher(LineType::Straight, 2.0);
        assert_eq!(b.draw_points(&[p(1, 1)]), Err(LineError::NotEnoughPoints { count: 1 }));
        assert_eq!(b.draw_points(&[]), Err(LineError::NotEnoughPoints { count: 0 }));
        assert!(b.batches().is_empty());
    }

    #[test]
    fn no_texture_refuses_to_build() {
        let mut b = LineBatcher::new();
        assert!(!b.validate_texture());
        assert_eq!(b.draw_points(&[p(0, 0), p(10, 0)]), Err(LineError::TextureNotSet));
        assert!(b.batches().is_empty());
        assert!(b.vertex_data().is_empty());
    }

    #[test]
    fn failed_build_drops_previous_output() {
        let mut b = batcher(LineType::Straight, 2.0);
        b.draw_points(&[p(0, 0), p(10, 0)]).unwrap();
        assert!(!b.batches().is_empty());

        b.set_line_rect(IntRect::ZERO);
        assert_eq!(b.build(), Err(LineError::EmptySourceRect));
        assert!(b.batches().is_empty());
    }

    #[test]
    fn negative_pixel_size_is_rejected() {
        let mut b = batcher(LineType::Straight, -1.0);
        assert_eq!(b.draw_points(&[p(0, 0), p(10, 0)]), Err(LineError::InvalidPixelSize(-1.0)));
    }

    #[test]
    fn very_wide_source_rect_still_builds() {
        let mut b = batcher(LineType::Straight, 2.0);
        b.set_line_rect(IntRect::new(-2_000_000_000, 0, 2_000_000_000, 1));
        assert!(b.validate_texture());
        b.draw_points(&[p(0, 0), p(10, 0)]).unwrap();
        assert_eq!(b.batches().len(), 1);
    }

    #[test]
    fn with_style_matches_setters() {
        let style = LineStyle {
            texture: Some(TEXTURE),
            source_rect: IntRect::new(84, 87, 85, 88),
            pixel_size: 2.0,
            ..LineStyle::default()
        };
        let mut styled = LineBatcher::with_style(style);
        styled.draw_points(&[p(0, 0), p(30, 40)]).unwrap();

        let mut set = batcher(LineType::Straight, 2.0);
        set.draw_points(&[p(0, 0), p(30, 40)]).unwrap();

        assert_eq!(styled.batches(), set.batches());
        assert_eq!(styled.vertices(), set.vertices());
    }

    // ── straight lines ────────────────────────────────────────────────────

    #[test]
    fn two_points_make_one_quad_in_one_batch() {
        let mut b = batcher(LineType::Straight, 4.0);
        b.draw_points(&[p(10, 20), p(110, 20)]).unwrap();

        assert_eq!(b.quads().len(), 1);
        assert_eq!(b.batches().len(), 1);
        assert_eq!(b.vertices().len(), 6);
        // Corners at (10,16) (110,16) (10,24) (110,24).
        assert_eq!(b.batches()[0].scissor, IntRect::new(10, 16, 110, 24));
    }

    #[test]
    fn three_collinear_points_have_no_cross_quad() {
        let mut b = batcher(LineType::Straight, 2.0);
        b.draw_points(&[p(0, 0), p(10, 0), p(20, 0)]).unwrap();
        assert_eq!(b.quads().len(), 2);
        assert_eq!(b.vertices().len(), 12);
    }

    #[test]
    fn l_shape_has_one_cross_quad() {
        let mut b = batcher(LineType::Straight, 2.0);
        b.draw_points(&[p(0, 0), p(10, 0), p(10, 10)]).unwrap();
        assert_eq!(b.quads().len(), 2);
        // Two segment quads plus the cross quad.
        assert_eq!(b.vertices().len(), 18);
    }

    #[test]
    fn duplicate_points_never_produce_nan() {
        let mut b = batcher(LineType::Straight, 3.0);
        b.draw_points(&[p(0, 0), p(0, 0), p(10, 5), p(10, 5), p(20, 0)]).unwrap();
        assert!(b.vertices().iter().all(|v| v.position().is_finite()));
        assert!(b.vertices().iter().all(|v| v.uv.iter().all(|c| c.is_finite())));
    }

    #[test]
    fn single_repeated_point_builds_nothing() {
        let mut b = batcher(LineType::Straight, 3.0);
        assert_eq!(b.draw_points(&[p(4, 4), p(4, 4)]), Ok(()));
        assert!(b.batches().is_empty());
    }

    // ── curves ────────────────────────────────────────────────────────────

    #[test]
    fn curve_makes_k_times_n_quads() {
        let mut b = batcher(LineType::Curve, 2.0);
        let pts = [p(100, 480), p(200, 530), p(300, 500), p(400, 550), p(500, 500)];
        b.draw_points(&pts).unwrap();
        assert_eq!(b.quads().len(), 4 * pts.len());
        assert!(b.vertices().iter().all(|v| v.position().is_finite()));
    }

    #[test]
    fn curve_with_zero_samples_is_empty() {
        let mut b = batcher(LineType::Curve, 2.0);
        b.set_num_points_per_segment(0);
        assert_eq!(b.draw_points(&[p(0, 0), p(10, 10), p(20, 0)]), Ok(()));
        assert!(b.batches().is_empty());
        assert!(b.quads().is_empty());
    }

    // ── state ─────────────────────────────────────────────────────────────

    #[test]
    fn clear_then_rebuild_has_no_leakage() {
        let mut reused = batcher(LineType::Straight, 2.0);
        reused.draw_points(&[p(0, 0), p(50, 50), p(100, 0)]).unwrap();
        reused.clear_point_list();
        reused.add_points(&[p(5, 5), p(25, 5)]);
        reused.build().unwrap();

        let mut fresh = batcher(LineType::Straight, 2.0);
        fresh.draw_points(&[p(5, 5), p(25, 5)]).unwrap();

        assert_eq!(reused.batches(), fresh.batches());
        // Colors are raw bits in the float stream; compare typed vertices.
        assert_eq!(reused.vertices(), fresh.vertices());
    }

    #[test]
    fn set_point_then_build_moves_geometry() {
        let mut b = batcher(LineType::Straight, 1.0);
        b.draw_points(&[p(0, 0), p(10, 0)]).unwrap();
        b.set_point(1, p(0, 10)).unwrap();
        b.build().unwrap();
        assert_eq!(b.quads()[0].b, Vec2::new(1.0, 10.0));
    }

    // ── get_batches ───────────────────────────────────────────────────────

    #[test]
    fn get_batches_rebases_onto_caller_buffer() {
        let mut b = batcher(LineType::Straight, 2.0);
        b.draw_points(&[p(0, 0), p(10, 0), p(10, 10)]).unwrap();

        let mut out_batches = Vec::new();
        let mut out_data = vec![0.0; 12];
        b.get_batches(&mut out_batches, &mut out_data, IntRect::UNBOUNDED);

        assert_eq!(out_data.len(), 12 + b.vertex_data().len());
        assert_eq!(out_batches.first().map(|x| x.vertex_start), Some(12));
        assert_eq!(UiVertex::from_floats(&out_data[12..]), b.vertices());
        for (ours, theirs) in b.batches().iter().zip(&out_batches) {
            assert_eq!(theirs.vertex_start, ours.vertex_start + 12);
            assert_eq!(theirs.scissor, ours.scissor);
        }
        // Internal ranges are untouched.
        assert_eq!(b.batches()[0].vertex_start, 0);
    }

    #[test]
    fn get_batches_merges_with_callers_last_batch() {
        let mut b = batcher(LineType::Straight, 2.0);
        b.draw_points(&[p(0, 0), p(10, 0)]).unwrap();
        let ours = b.batches()[0];

        let mut out_batches = vec![UiBatch { vertex_start: 0, vertex_end: 36, ..ours }];
        let mut out_data = vec![0.0; 36];
        b.get_batches(&mut out_batches, &mut out_data, IntRect::UNBOUNDED);

        assert_eq!(out_batches.len(), 1);
        assert_eq!(out_batches[0].range(), 0..72);
    }

    #[test]
    fn get_batches_clips_and_skips() {
        let mut b = batcher(LineType::Straight, 2.0);
        b.draw_points(&[p(0, 0), p(100, 0)]).unwrap();

        let mut out_batches = Vec::new();
        let mut out_data = Vec::new();
        b.get_batches(&mut out_batches, &mut out_data, IntRect::new(50, -10, 200, 10));
        assert_eq!(out_batches[0].scissor, IntRect::new(50, -2, 100, 2));

        out_batches.clear();
        out_data.clear();
        b.get_batches(&mut out_batches, &mut out_data, IntRect::new(500, 500, 600, 600));
        assert!(out_batches.is_empty());
        assert!(out_data.is_empty());
    }

    #[test]
    fn vertex_ranges_are_contiguous_and_ordered() {
        let mut b = batcher(LineType::Curve, 3.0);
        b.draw_points(&[p(0, 0), p(40, 60), p(80, 0), p(120, 60)]).unwrap();

        let mut expected_start = 0;
        for batch in b.batches() {
            assert_eq!(batch.vertex_start, expected_start);
            assert_eq!(batch.range().len() % (6 * UI_VERTEX_SIZE), 0);
            expected_start = batch.vertex_end;
        }
        assert_eq!(expected_start, b.vertex_data().len());
    }
}
