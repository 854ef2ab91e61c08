//! Line batching engine crate.
//!
//! Turns ordered point lists into textured quad geometry grouped into
//! renderer-ready batches. Window, input and GPU resource ownership stay with
//! the host; this crate only produces vertex data and batch descriptors.

pub mod logging;
pub mod coords;
pub mod paint;
pub mod batch;
pub mod line;
pub mod connector;
