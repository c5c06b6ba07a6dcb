use glam::{Mat4, Vec2};

/// Axis-aligned rectangle in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Inclusive on every edge.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Nearest point inside the rectangle.
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min, self.max)
    }
}

/// 2-D camera: the world rectangle centred on `center` with extent `size` is
/// stretched over the whole window.  World Y grows downwards, like window
/// pixel coordinates.
///
/// The struct lives in core so that the game can pick a view and the renderer
/// can upload it without either knowing about the other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View2D {
    pub center: Vec2,
    pub size: Vec2,
}

impl View2D {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    /// View covering `[0, width] × [0, height]`.
    pub fn from_extent(extent: Vec2) -> Self {
        Self {
            center: extent * 0.5,
            size: extent,
        }
    }

    /// Same centre, extent multiplied by `factor`.  A factor above 1 shows a
    /// larger region of the world.
    pub fn zoomed(&self, factor: f32) -> Self {
        Self {
            center: self.center,
            size: self.size * factor,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_center_size(self.center, self.size)
    }

    /// Orthographic view-projection matrix with Y pointing down.
    pub fn view_projection(&self) -> Mat4 {
        let r = self.bounds();
        Mat4::orthographic_rh(r.min.x, r.max.x, r.max.y, r.min.y, -1.0, 1.0)
    }

    /// Map a window pixel position to world coordinates.
    ///
    /// Returns the view centre when the window has a zero-sized axis.
    pub fn screen_to_world(&self, screen: Vec2, window: Vec2) -> Vec2 {
        if window.x <= 0.0 || window.y <= 0.0 {
            return self.center;
        }
        self.center + (screen / window - Vec2::splat(0.5)) * self.size
    }

    /// Map a world position to normalised device coordinates.
    pub fn world_to_ndc(&self, world: Vec2) -> Vec2 {
        (self.view_projection() * world.extend(0.0).extend(1.0))
            .truncate()
            .truncate()
    }
}

/// Uniform data uploaded to the GPU. The sprite shader only needs the 4x4
/// view-projection matrix.
#[cfg(feature = "gpu")]
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

#[cfg(feature = "gpu")]
impl CameraUniform {
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
        }
    }

    pub fn update_view_proj(&mut self, view: &View2D) {
        self.view_proj = view.view_projection().to_cols_array_2d();
    }
}

#[cfg(feature = "gpu")]
impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn projection_maps_corners() {
        let view = View2D::from_extent(Vec2::new(1000.0, 800.0));
        assert!(close(view.world_to_ndc(Vec2::new(500.0, 400.0)), Vec2::ZERO));
        assert!(close(view.world_to_ndc(Vec2::ZERO), Vec2::new(-1.0, 1.0)));
        assert!(close(view.world_to_ndc(Vec2::new(1000.0, 800.0)), Vec2::new(1.0, -1.0)));
    }

    #[test]
    fn zoom_keeps_center_and_scales_extent() {
        let view = View2D::from_extent(Vec2::new(1000.0, 800.0)).zoomed(2.0);
        assert_eq!(view.center, Vec2::new(500.0, 400.0));
        let b = view.bounds();
        assert_eq!(b.min, Vec2::new(-500.0, -400.0));
        assert_eq!(b.max, Vec2::new(1500.0, 1200.0));
    }

    #[test]
    fn screen_to_world_follows_view() {
        let window = Vec2::new(1000.0, 800.0);
        let normal = View2D::from_extent(window);
        assert!(close(normal.screen_to_world(Vec2::new(250.0, 100.0), window), Vec2::new(250.0, 100.0)));

        let zoomed = normal.zoomed(2.0);
        assert!(close(zoomed.screen_to_world(Vec2::new(500.0, 400.0), window), Vec2::new(500.0, 400.0)));
        assert!(close(zoomed.screen_to_world(Vec2::ZERO, window), Vec2::new(-500.0, -400.0)));

        // a window twice as large still spans the same world rectangle
        let big = window * 2.0;
        assert!(close(normal.screen_to_world(Vec2::new(1000.0, 800.0), big), Vec2::new(500.0, 400.0)));
    }

    #[test]
    fn degenerate_window_maps_to_center() {
        let view = View2D::from_extent(Vec2::new(10.0, 10.0));
        assert_eq!(view.screen_to_world(Vec2::new(3.0, 3.0), Vec2::ZERO), view.center);
    }

    #[test]
    fn rect_clamp_and_contains() {
        let r = Rect::new(Vec2::ZERO, Vec2::new(10.0, 5.0));
        assert!(r.contains(Vec2::new(10.0, 5.0)));
        assert!(!r.contains(Vec2::new(10.1, 5.0)));
        assert_eq!(r.clamp(Vec2::new(-1.0, 7.0)), Vec2::new(0.0, 5.0));
        assert_eq!(r.center(), Vec2::new(5.0, 2.5));
    }
}
