//! CPU side of sprite rendering: flattening a [`DrawList`] into instance
//! data and texture runs.

use std::ops::Range;

use survivor_core::{DrawCommand, DrawList, TextureId};

pub const SHAPE_TEXTURED: f32 = 0.0;
pub const SHAPE_SOLID: f32 = 1.0;
pub const SHAPE_CIRCLE: f32 = 2.0;

/// Per-instance data for the unit quad.  Matches `InstanceInput` in
/// `sprite.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpriteInstance {
    pub center: [f32; 2],
    pub size: [f32; 2],
    /// Radians, clockwise on screen.
    pub rotation: f32,
    /// One of the `SHAPE_*` constants.
    pub shape: f32,
    pub color: [f32; 4],
}

impl SpriteInstance {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        1 => Float32x2,
        2 => Float32x2,
        3 => Float32,
        4 => Float32,
        5 => Float32x4
    ];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SpriteInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Texture bound for a run of instances.  Shapes sample a white pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchTexture {
    Image(TextureId),
    White,
}

/// Consecutive instances sharing one texture.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawBatch {
    pub texture: BatchTexture,
    pub instances: Range<u32>,
}

/// Reusable buffers for one frame's instances.
#[derive(Debug, Default)]
pub struct SpriteBatcher {
    instances: Vec<SpriteInstance>,
    batches: Vec<DrawBatch>,
}

impl SpriteBatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from `list`, preserving draw order.  Neighbouring commands
    /// with the same texture share a batch.
    pub fn build(&mut self, list: &DrawList) {
        self.instances.clear();
        self.batches.clear();

        for command in list.commands() {
            let (texture, instance) = match *command {
                DrawCommand::Sprite(s) => (
                    BatchTexture::Image(s.texture),
                    SpriteInstance {
                        center: s.center.to_array(),
                        size: s.size.to_array(),
                        rotation: s.rotation_deg.to_radians(),
                        shape: SHAPE_TEXTURED,
                        color: s.tint.to_array(),
                    },
                ),
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                } => (
                    BatchTexture::White,
                    SpriteInstance {
                        center: center.to_array(),
                        size: [radius * 2.0; 2],
                        rotation: 0.0,
                        shape: SHAPE_CIRCLE,
                        color: color.to_array(),
                    },
                ),
                DrawCommand::Line {
                    from,
                    to,
                    thickness,
                    color,
                } => {
                    let d = to - from;
                    (
                        BatchTexture::White,
                        SpriteInstance {
                            center: ((from + to) * 0.5).to_array(),
                            size: [d.length(), thickness],
                            rotation: d.y.atan2(d.x),
                            shape: SHAPE_SOLID,
                            color: color.to_array(),
                        },
                    )
                }
            };
            self.push(texture, instance);
        }
    }

    fn push(&mut self, texture: BatchTexture, instance: SpriteInstance) {
        let index = self.instances.len() as u32;
        self.instances.push(instance);
        match self.batches.last_mut() {
            Some(last) if last.texture == texture => last.instances.end = index + 1,
            _ => self.batches.push(DrawBatch {
                texture,
                instances: index..index + 1,
            }),
        }
    }

    pub fn instances(&self) -> &[SpriteInstance] {
        &self.instances
    }

    pub fn batches(&self) -> &[DrawBatch] {
        &self.batches
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;
    use survivor_core::{Color, SpriteDraw};

    use super::*;

    fn sprite(id: u32) -> SpriteDraw {
        SpriteDraw {
            texture: TextureId(id),
            center: Vec2::new(1.0, 2.0),
            size: Vec2::new(8.0, 4.0),
            rotation_deg: 90.0,
            tint: Color::WHITE,
        }
    }

    #[test]
    fn instance_layout_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<SpriteInstance>(), 40);
    }

    #[test]
    fn runs_of_the_same_texture_merge() {
        let mut list = DrawList::new();
        list.sprite(sprite(0));
        list.circle(Vec2::ZERO, 4.0, Color::YELLOW);
        list.circle(Vec2::ONE, 4.0, Color::YELLOW);
        list.line(Vec2::ZERO, Vec2::X, 1.0, Color::RED);
        list.sprite(sprite(3));
        list.sprite(sprite(3));

        let mut batcher = SpriteBatcher::new();
        batcher.build(&list);

        assert_eq!(batcher.instances().len(), 6);
        assert_eq!(
            batcher.batches(),
            &[
                DrawBatch {
                    texture: BatchTexture::Image(TextureId(0)),
                    instances: 0..1
                },
                DrawBatch {
                    texture: BatchTexture::White,
                    instances: 1..4
                },
                DrawBatch {
                    texture: BatchTexture::Image(TextureId(3)),
                    instances: 4..6
                },
            ]
        );
    }

    #[test]
    fn shapes_become_quads() {
        let mut list = DrawList::new();
        list.circle(Vec2::new(5.0, 5.0), 4.0, Color::YELLOW);
        list.line(Vec2::new(0.0, 0.0), Vec2::new(0.0, 10.0), 2.0, Color::RED);
        list.sprite(sprite(1));

        let mut batcher = SpriteBatcher::new();
        batcher.build(&list);
        let inst = batcher.instances();

        assert_eq!(inst[0].size, [8.0, 8.0]);
        assert_eq!(inst[0].shape, SHAPE_CIRCLE);

        assert_eq!(inst[1].center, [0.0, 5.0]);
        assert_eq!(inst[1].size, [10.0, 2.0]);
        assert!((inst[1].rotation - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert_eq!(inst[1].shape, SHAPE_SOLID);

        assert!((inst[2].rotation - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert_eq!(inst[2].shape, SHAPE_TEXTURED);
    }

    #[test]
    fn rebuilding_discards_the_previous_frame() {
        let mut list = DrawList::new();
        list.sprite(sprite(0));
        let mut batcher = SpriteBatcher::new();
        batcher.build(&list);
        list.clear(Color::BLACK);
        batcher.build(&list);
        assert!(batcher.is_empty());
        assert!(batcher.batches().is_empty());
    }
}
