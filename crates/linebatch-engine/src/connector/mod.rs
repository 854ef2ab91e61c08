//! Draggable connector curves.
//!
//! A connector runs from an anchor on a parent box to the cursor. Its shape
//! is a five-knot curve whose inner knots bend out horizontally first, so the
//! line leaves and enters the boxes sideways.

mod curve;
mod line;

pub use curve::{connector_anchor, connector_points, ConnectorLayout, CONNECTOR_POINTS};
pub use line::ConnectorLine;
