//! Coordinate and geometry types shared by the line pipeline and batches.
//!
//! Canonical space:
//! - Screen pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Input points are integer (`IntVec2`); everything derived from them
//! (spline samples, quad corners) is `Vec2`.

mod int_rect;
mod int_vec2;
mod vec2;

pub use int_rect::IntRect;
pub use int_vec2::IntVec2;
pub use vec2::Vec2;
