use crate::batch::{TextureHandle, UiBatch};
use crate::coords::{IntRect, IntVec2};
use crate::line::{LineBatcher, LineError, LineType, DEFAULT_POINTS_PER_CURVE_SEGMENT};
use crate::paint::Color;

use super::{connector_anchor, connector_points, ConnectorLayout};

const CONNECTOR_HALF_WIDTH: f32 = 2.0;

/// A curve from a parent box anchor to a dragged end handle.
///
/// # Example
/// ```rust,ignore
/// let mut conn = ConnectorLine::new(ui_texture, ConnectorLayout::default())
///     .on_change(|end| log::info!("connector end: {end:?}"));
/// conn.set_parent_rect(IntVec2::new(40, 40), IntVec2::new(200, 120));
/// conn.drag_to(IntVec2::new(420, 260))?;
/// ```
pub struct ConnectorLine {
    layout: ConnectorLayout,
    anchor: IntVec2,
    end: Option<IntVec2>,
    batcher: LineBatcher,
    /// Called after every successful redraw with the new end point.
    on_change: Option<Box<dyn FnMut(IntVec2)>>,
}

impl ConnectorLine {
    pub fn new(texture: TextureHandle, layout: ConnectorLayout) -> Self {
        let mut batcher = LineBatcher::new();
        batcher.set_line_texture(texture, layout.box_rect);
        batcher.set_line_type(LineType::Curve);
        batcher.set_line_pixel_size(CONNECTOR_HALF_WIDTH);
        batcher.set_color(Color::YELLOW * 0.9);
        batcher.set_num_points_per_segment(DEFAULT_POINTS_PER_CURVE_SEGMENT);

        Self {
            layout,
            anchor: IntVec2::zero(),
            end: None,
            batcher,
            on_change: None,
        }
    }

    pub fn on_change(mut self, f: impl FnMut(IntVec2) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    #[inline]
    pub fn layout(&self) -> &ConnectorLayout {
        &self.layout
    }

    #[inline]
    pub fn batcher(&self) -> &LineBatcher {
        &self.batcher
    }

    /// Top-left of the anchor handle box.
    #[inline]
    pub fn anchor(&self) -> IntVec2 {
        self.anchor
    }

    /// Curve start: center of the anchor handle box.
    #[inline]
    pub fn start(&self) -> IntVec2 {
        self.anchor + self.layout.half_box()
    }

    #[inline]
    pub fn end(&self) -> Option<IntVec2> {
        self.end
    }

    /// Top-left of the tail handle box, centered on the end point.
    pub fn tail_box_position(&self) -> Option<IntVec2> {
        self.end.map(|e| e - self.layout.half_box())
    }

    /// Re-anchors to a parent box that moved or resized.
    ///
    /// An existing curve is redrawn from the new anchor.
    pub fn set_parent_rect(&mut self, parent_pos: IntVec2, parent_size: IntVec2) -> Result<(), LineError> {
        self.anchor = connector_anchor(parent_pos, parent_size, &self.layout);
        match self.end {
            Some(end) => self.redraw(end),
            None => Ok(()),
        }
    }

    /// Moves the tail to `screen_pos` and redraws the curve.
    pub fn drag_to(&mut self, screen_pos: IntVec2) -> Result<(), LineError> {
        self.redraw(screen_pos)
    }

    fn redraw(&mut self, end: IntVec2) -> Result<(), LineError> {
        let points = connector_points(self.start(), end);
        self.batcher.draw_points(&points)?;
        self.end = Some(end);

        if let Some(f) = &mut self.on_change {
            f(end);
        }
        Ok(())
    }

    /// Copies the curve's batches into a frame buffer; see
    /// [`LineBatcher::get_batches`].
    pub fn get_batches(&self, batches: &mut Vec<UiBatch>, vertex_data: &mut Vec<f32>, clip: IntRect) {
        self.batcher.get_batches(batches, vertex_data, clip);
    }
}

impl std::fmt::Debug for ConnectorLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectorLine")
            .field("layout", &self.layout)
            .field("anchor", &self.anchor)
            .field("end", &self.end)
            .field("batches", &self.batcher.batches().len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::batch::TextureId;
    use crate::connector::CONNECTOR_POINTS;

    const TEXTURE: TextureHandle = TextureHandle::new(TextureId(9), 128, 128);

    fn p(x: i32, y: i32) -> IntVec2 { IntVec2::new(x, y) }

    #[test]
    fn drag_builds_curve_from_anchor_center() {
        let mut conn = ConnectorLine::new(TEXTURE, ConnectorLayout::default());
        conn.set_parent_rect(p(0, 0), p(100, 100)).unwrap();
        assert_eq!(conn.anchor(), p(100, 76));
        assert_eq!(conn.start(), p(108, 84));

        conn.drag_to(p(400, 300)).unwrap();
        assert_eq!(conn.batcher().points().len(), CONNECTOR_POINTS);
        assert_eq!(conn.batcher().points()[0], p(108, 84));
        assert_eq!(conn.batcher().points()[4], p(400, 300));
        assert_eq!(
            conn.batcher().quads().len(),
            DEFAULT_POINTS_PER_CURVE_SEGMENT * CONNECTOR_POINTS
        );
        assert_eq!(conn.tail_box_position(), Some(p(392, 292)));
    }

    #[test]
    fn on_change_reports_each_redraw() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut conn = ConnectorLine::new(TEXTURE, ConnectorLayout::default())
            .on_change(move |end| sink.borrow_mut().push(end));

        conn.drag_to(p(300, 200)).unwrap();
        conn.set_parent_rect(p(50, 50), p(100, 100)).unwrap();

        assert_eq!(*seen.borrow(), vec![p(300, 200), p(300, 200)]);
    }

    #[test]
    fn moving_parent_before_any_drag_draws_nothing() {
        let mut conn = ConnectorLine::new(TEXTURE, ConnectorLayout::default());
        conn.set_parent_rect(p(10, 10), p(50, 50)).unwrap();
        assert!(conn.batcher().batches().is_empty());
        assert_eq!(conn.end(), None);
    }

    #[test]
    fn curve_geometry_is_tinted_yellow() {
        let mut conn = ConnectorLine::new(TEXTURE, ConnectorLayout::default());
        conn.drag_to(p(200, 120)).unwrap();
        let expected = (Color::YELLOW * 0.9).to_packed();
        assert!(conn.batcher().vertices().iter().all(|v| v.color == expected));
    }
}
