//! Backend-agnostic draw commands.
//!
//! Game code fills a [`DrawList`] every frame; the renderer turns it into GPU
//! instances.  Commands are drawn in push order, so later commands appear on
//! top of earlier ones.

use glam::Vec2;

use crate::color::Color;
use crate::sprite::{SpriteFrame, TextureId};

/// A textured, rotated quad centred on `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteDraw {
    pub texture: TextureId,
    pub center: Vec2,
    /// Size in world units after scaling.
    pub size: Vec2,
    /// Clockwise rotation in degrees (Y grows downwards).
    pub rotation_deg: f32,
    pub tint: Color,
}

impl SpriteDraw {
    /// Draw `frame` centred on `center`, scaled uniformly by `scale`.
    pub fn from_frame(frame: SpriteFrame, center: Vec2, scale: f32, rotation_deg: f32) -> Self {
        Self {
            texture: frame.texture,
            center,
            size: frame.size * scale,
            rotation_deg,
            tint: Color::WHITE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Sprite(SpriteDraw),
    /// Filled circle.
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    /// Straight segment drawn as a quad `thickness` units wide.
    Line {
        from: Vec2,
        to: Vec2,
        thickness: f32,
        color: Color,
    },
}

/// Ordered draw commands for one frame plus the clear colour.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawList {
    pub clear_color: Color,
    commands: Vec<DrawCommand>,
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            clear_color: Color::BLACK,
            commands: Vec::new(),
        }
    }

    /// Drop all commands and set the clear colour for the next frame.
    pub fn clear(&mut self, color: Color) {
        self.clear_color = color;
        self.commands.clear();
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn sprite(&mut self, sprite: SpriteDraw) {
        self.push(DrawCommand::Sprite(sprite));
    }

    pub fn circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.push(DrawCommand::Circle { center, radius, color });
    }

    pub fn line(&mut self, from: Vec2, to: Vec2, thickness: f32, color: Color) {
        self.push(DrawCommand::Line {
            from,
            to,
            thickness,
            color,
        });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
