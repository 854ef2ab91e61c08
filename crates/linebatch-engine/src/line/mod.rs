//! Line batching pipeline.
//!
//! Stages, in order:
//! 1. `points`  – ordered integer points, optionally resampled along a
//!    Catmull-Rom curve (`spline`)
//! 2. `segment` – one offset quad per consecutive point pair
//! 3. `stitch`  – joins neighbouring quads (corner averaging or cross quads)
//! 4. `emit`    – 6 textured, tinted vertices per piece, merged into batches
//!
//! [`LineBatcher`] drives the stages and owns every buffer involved. Nothing
//! survives between builds except the [`LineStyle`].

mod batcher;
mod emit;
mod error;
mod points;
mod segment;
mod spline;
mod stitch;
mod style;

pub use batcher::LineBatcher;
pub use emit::QuadEmitter;
pub use error::LineError;
pub use points::PointBuffer;
pub use segment::{build_quads, Quad};
pub use spline::CatmullRom;
pub use stitch::{stitch, Piece, STITCH_DOT_THRESHOLD};
pub use style::{LineStyle, LineType, DEFAULT_POINTS_PER_CURVE_SEGMENT};
