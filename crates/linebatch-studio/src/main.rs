use anyhow::{Context, Result};

use linebatch_engine::batch::{TextureHandle, TextureId, UiBatch, UiVertex};
use linebatch_engine::connector::{ConnectorLayout, ConnectorLine};
use linebatch_engine::coords::{IntRect, IntVec2};
use linebatch_engine::line::{LineBatcher, LineStyle, LineType, DEFAULT_POINTS_PER_CURVE_SEGMENT};
use linebatch_engine::logging::{init_logging, LoggingConfig};
use linebatch_engine::paint::{Color, CornerColors};

/// Stand-in for the UI atlas the host would load.
const UI_TEXTURE: TextureHandle = TextureHandle::new(TextureId(1), 128, 128);

/// Visible area of the demo frame.
const FRAME_CLIP: IntRect = IntRect::new(0, 0, 1280, 720);

const CONTROL_POINTS: [IntVec2; 5] = [
    IntVec2::new(100, 480),
    IntVec2::new(200, 530),
    IntVec2::new(300, 500),
    IntVec2::new(400, 550),
    IntVec2::new(500, 500),
];

/// Frame-level batch sink, as a host renderer would hold it.
#[derive(Default)]
struct Frame {
    batches: Vec<UiBatch>,
    vertex_data: Vec<f32>,
}

impl Frame {
    fn collect(&mut self, line: &LineBatcher) {
        line.get_batches(&mut self.batches, &mut self.vertex_data, FRAME_CLIP);
    }
}

fn line(line_type: LineType, color: Color, half_width: f32) -> LineBatcher {
    let points_per_segment = match line_type {
        LineType::Straight => 0,
        LineType::Curve => DEFAULT_POINTS_PER_CURVE_SEGMENT,
    };
    LineBatcher::with_style(LineStyle {
        line_type,
        pixel_size: half_width,
        colors: CornerColors::all(color),
        texture: Some(UI_TEXTURE),
        source_rect: ConnectorLayout::default().box_rect,
        points_per_segment,
        ..LineStyle::default()
    })
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut frame = Frame::default();

    let mut straight = line(LineType::Straight, Color::BLUE, 8.0);
    straight
        .draw_points(&CONTROL_POINTS)
        .context("building straight demo line")?;
    frame.collect(&straight);

    let shifted: Vec<IntVec2> = CONTROL_POINTS
        .iter()
        .map(|&p| p + IntVec2::new(0, 100))
        .collect();
    let mut curve = line(LineType::Curve, Color::RED, 4.0);
    curve.draw_points(&shifted).context("building curve demo line")?;

    // Simulate dragging a control box, as the interactive sample does.
    curve
        .set_point(2, IntVec2::new(300, 640))
        .context("moving curve control point")?;
    curve.build().context("rebuilding dragged curve")?;
    frame.collect(&curve);

    let mut connector = ConnectorLine::new(UI_TEXTURE, ConnectorLayout::default())
        .on_change(|end| log::info!("connector end moved to ({}, {})", end.x, end.y));
    connector
        .set_parent_rect(IntVec2::new(60, 60), IntVec2::new(240, 160))
        .context("anchoring connector")?;
    for end in [IntVec2::new(420, 180), IntVec2::new(520, 320), IntVec2::new(180, 400)] {
        connector.drag_to(end).context("dragging connector")?;
    }
    connector.get_batches(&mut frame.batches, &mut frame.vertex_data, FRAME_CLIP);

    let vertices = UiVertex::from_floats(&frame.vertex_data);
    log::info!(
        "frame: {} batches, {} vertices ({} bytes, stride {})",
        frame.batches.len(),
        vertices.len(),
        std::mem::size_of_val(vertices),
        UiVertex::layout().array_stride
    );
    for (name, l) in [("straight", &straight), ("curve", &curve), ("connector", connector.batcher())] {
        log::info!(
            "{name}: {} points, {} quads, {} batches",
            l.points().len(),
            l.quads().len(),
            l.batches().len()
        );
    }

    Ok(())
}
