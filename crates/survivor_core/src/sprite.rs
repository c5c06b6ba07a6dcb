//! Texture handles and animation frame sequences.
//!
//! The asset loader hands out a [`TextureId`] per decoded image; the renderer
//! uploads images in the same order so the id doubles as an index into its
//! texture table.  Gameplay code never touches pixels, only ids and sizes.

use glam::Vec2;

/// Opaque handle to an image registered with the asset store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(pub u32);

impl TextureId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One image of an animation (or a static sprite) together with its pixel
/// size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteFrame {
    pub texture: TextureId,
    pub size: Vec2,
}

impl SpriteFrame {
    pub fn new(texture: TextureId, size: Vec2) -> Self {
        Self { texture, size }
    }
}

/// Ordered, non-empty, read-only sequence of frames.
///
/// Frames are addressed cyclically: any index is reduced modulo the number of
/// frames, so a shared frame counter can never read out of bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSet {
    frames: Vec<SpriteFrame>,
}

impl FrameSet {
    /// Returns `None` when `frames` is empty.
    pub fn new(frames: Vec<SpriteFrame>) -> Option<Self> {
        if frames.is_empty() {
            None
        } else {
            Some(Self { frames })
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always `false`; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame at `index mod len`.
    pub fn frame(&self, index: usize) -> SpriteFrame {
        self.frames[index % self.frames.len()]
    }

    pub fn frames(&self) -> &[SpriteFrame] {
        &self.frames
    }
}
