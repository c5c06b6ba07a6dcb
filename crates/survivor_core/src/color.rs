//! RGBA colour type used by draw commands and the renderer.
//!
//! Stored as four `f32` values (0.0 – 1.0).  The handful of colours the game
//! needs are available as associated constants.

/// RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Color {
    // ── Constructors ────────────────────────────────────────────────────────

    /// Opaque colour from red, green, blue components.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    // ── Conversions ─────────────────────────────────────────────────────────

    /// Returns `[r, g, b, a]`, the layout of the sprite instance colour.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Convert to a `wgpu::Color` for use as a clear value.
    #[cfg(feature = "gpu")]
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }

    // ── Palette ─────────────────────────────────────────────────────────────

    /// Background clear and the untinted sprite.
    pub const WHITE:  Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK:  Self = Self::rgb(0.0, 0.0, 0.0);

    /// Aim line.
    pub const RED:    Self = Self::rgb(1.0, 0.0, 0.0);
    /// Bullets.
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);
}
