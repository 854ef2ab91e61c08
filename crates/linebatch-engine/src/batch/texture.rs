/// Opaque texture identity used for batch-merge comparisons.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct TextureId(pub u64);

/// Host texture reference: identity plus the size needed to normalize UVs.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextureHandle {
    pub id: TextureId,
    pub width: u32,
    pub height: u32,
}

impl TextureHandle {
    #[inline]
    pub const fn new(id: TextureId, width: u32, height: u32) -> Self {
        Self { id, width, height }
    }

    /// `(1 / width, 1 / height)`; zero for a zero-sized axis.
    #[inline]
    pub fn inv_size(self) -> (f32, f32) {
        let inv = |v: u32| if v == 0 { 0.0 } else { 1.0 / v as f32 };
        (inv(self.width), inv(self.height))
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}
