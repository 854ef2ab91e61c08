//! Render batch types handed to the host renderer.
//!
//! Responsibilities:
//! - describe a run of vertices sharing texture, blend mode and scissor
//! - define the interleaved vertex format and its wgpu layout
//! - merge adjacent compatible batches deterministically
//!
//! Vertex ranges are expressed in floats (`UI_VERTEX_SIZE` per vertex) so they
//! index directly into the shared `Vec<f32>` vertex buffer.

mod blend;
mod texture;
mod ui_batch;
mod vertex;

pub use blend::BlendMode;
pub use texture::{TextureHandle, TextureId};
pub use ui_batch::UiBatch;
pub use vertex::{UiVertex, UI_VERTEX_SIZE};
