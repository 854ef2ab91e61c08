use core::ops::Range;

use crate::coords::IntRect;

use super::{BlendMode, TextureId};

/// A run of vertices sharing render state.
///
/// `vertex_start..vertex_end` indexes floats (not vertices) in the vertex
/// buffer the batch was emitted into.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct UiBatch {
    pub texture: TextureId,
    pub blend_mode: BlendMode,
    /// Inclusive pixel bounds the renderer should scissor to.
    pub scissor: IntRect,
    pub vertex_start: usize,
    pub vertex_end: usize,
}

impl UiBatch {
    #[inline]
    pub fn new(texture: TextureId, blend_mode: BlendMode, scissor: IntRect, range: Range<usize>) -> Self {
        Self {
            texture,
            blend_mode,
            scissor,
            vertex_start: range.start,
            vertex_end: range.end,
        }
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.vertex_start..self.vertex_end
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertex_end <= self.vertex_start
    }

    /// True when both batches bind the same texture, blend mode and scissor.
    #[inline]
    pub fn same_state(&self, other: &UiBatch) -> bool {
        self.texture == other.texture
            && self.blend_mode == other.blend_mode
            && self.scissor == other.scissor
    }

    /// Extends `self` by `next` when render state matches and `next` starts
    /// exactly where `self` ends. Returns whether the merge happened.
    #[inline]
    pub fn merge(&mut self, next: &UiBatch) -> bool {
        if !self.same_state(next) || next.vertex_start != self.vertex_end {
            return false;
        }
        self.vertex_end = next.vertex_end;
        true
    }

    /// Appends `batch` to `batches`, merging into the last entry when possible.
    ///
    /// Empty batches are dropped. Only the last entry is considered, so batch
    /// order always follows emission order.
    pub fn add_or_merge(batch: UiBatch, batches: &mut Vec<UiBatch>) {
        if batch.is_empty() {
            return;
        }
        if let Some(last) = batches.last_mut() {
            if last.merge(&batch) {
                return;
            }
        }
        batches.push(batch);
    }
}
