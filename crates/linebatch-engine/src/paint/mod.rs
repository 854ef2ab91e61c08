//! Vertex tint model.
//!
//! Scope:
//! - color representation (straight alpha, packed for vertex streams)
//! - per-corner tint of a line quad
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod corners;

pub use color::Color;
pub use corners::{Corner, CornerColors};
