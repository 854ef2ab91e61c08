use crate::batch::{BlendMode, TextureHandle, UiBatch, UiVertex, UI_VERTEX_SIZE};
use crate::coords::{IntRect, Vec2};
use crate::paint::{Corner, CornerColors};

use super::{LineError, LineStyle, Piece};

/// Converts stitched pieces into vertex data and batches.
///
/// Constructing one is the readiness check: it fails without a usable texture
/// and source rect, so a build never emits half-configured geometry.
#[derive(Debug, Clone)]
pub struct QuadEmitter {
    texture: TextureHandle,
    blend_mode: BlendMode,
    /// UVs indexed by `Corner as usize`.
    uvs: [[f32; 2]; 4],
    /// Packed colors indexed by `Corner as usize`.
    colors: [u32; 4],
}

impl QuadEmitter {
    pub fn new(style: &LineStyle) -> Result<Self, LineError> {
        let texture = style.texture.ok_or(LineError::TextureNotSet)?;
        if !texture.is_valid() {
            return Err(LineError::EmptyTexture {
                width: texture.width,
                height: texture.height,
            });
        }
        if style.source_rect == IntRect::ZERO || style.source_rect.is_empty() {
            return Err(LineError::EmptySourceRect);
        }

        let (inv_w, inv_h) = texture.inv_size();
        let r = style.source_rect;
        let left = r.left as f32 * inv_w;
        let right = r.right as f32 * inv_w;
        let top = r.top as f32 * inv_h;
        let bottom = r.bottom as f32 * inv_h;

        let packed = |colors: &CornerColors, c: Corner| colors.get(c).to_packed();

        Ok(Self {
            texture,
            blend_mode: style.blend_mode,
            uvs: [[left, top], [right, top], [left, bottom], [right, bottom]],
            colors: [
                packed(&style.colors, Corner::TopLeft),
                packed(&style.colors, Corner::TopRight),
                packed(&style.colors, Corner::BottomLeft),
                packed(&style.colors, Corner::BottomRight),
            ],
        })
    }

    #[inline]
    fn vertex(&self, pos: Vec2, corner: Corner) -> UiVertex {
        UiVertex::new(pos, self.colors[corner as usize], self.uvs[corner as usize])
    }

    /// The 6 vertices (two triangles) drawn for `piece`.
    pub fn vertices(&self, piece: &Piece) -> [UiVertex; 6] {
        use Corner::*;

        match piece {
            Piece::Segment(q) => [
                self.vertex(q.a, TopLeft),
                self.vertex(q.b, TopRight),
                self.vertex(q.d, BottomRight),
                self.vertex(q.a, TopLeft),
                self.vertex(q.d, BottomRight),
                self.vertex(q.c, BottomLeft),
            ],
            Piece::Cross(q) => [
                self.vertex(q.b, TopRight),
                self.vertex(q.a, TopLeft),
                self.vertex(q.d, BottomRight),
                self.vertex(q.b, TopRight),
                self.vertex(q.c, BottomLeft),
                self.vertex(q.d, BottomRight),
            ],
        }
    }

    /// Appends `piece` to `vertex_data` and records it in `batches`.
    ///
    /// The batch scissor is the pixel bound of the rounded vertex positions.
    /// It merges into the last batch when render state matches.
    pub fn emit(&self, piece: &Piece, vertex_data: &mut Vec<f32>, batches: &mut Vec<UiBatch>) {
        let vertices = self.vertices(piece);

        let Some(scissor) = IntRect::bounding(vertices.iter().map(|v| v.position().round_to_int()))
        else {
            return;
        };

        let start = vertex_data.len();
        vertex_data.extend_from_slice(UiVertex::as_floats(&vertices));
        debug_assert_eq!(vertex_data.len() - start, 6 * UI_VERTEX_SIZE);

        let batch = UiBatch::new(self.texture.id, self.blend_mode, scissor, start..vertex_data.len());
        UiBatch::add_or_merge(batch, batches);
    }
}
