use glam::Vec2;
use survivor_core::{Rect, View2D};

/// Which of the two fixed views is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMode {
    #[default]
    Normal,
    /// Aiming: same centre, larger visible extent.
    Zoomed,
}

/// The two precomputed views and the switch between them.  Views are
/// swapped, never interpolated.
#[derive(Debug, Clone)]
pub struct Camera {
    mode: CameraMode,
    normal: View2D,
    zoomed: View2D,
}

impl Camera {
    pub fn new(world_size: Vec2, zoom_factor: f32) -> Self {
        let normal = View2D::from_extent(world_size);
        Self {
            mode: CameraMode::Normal,
            normal,
            zoomed: normal.zoomed(zoom_factor),
        }
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: CameraMode) {
        if self.mode != mode {
            log::debug!("camera mode {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
    }

    /// View used for rendering and cursor mapping this frame.
    pub fn active(&self) -> &View2D {
        match self.mode {
            CameraMode::Normal => &self.normal,
            CameraMode::Zoomed => &self.zoomed,
        }
    }

    pub fn view(&self, mode: CameraMode) -> &View2D {
        match mode {
            CameraMode::Normal => &self.normal,
            CameraMode::Zoomed => &self.zoomed,
        }
    }

    /// Union of both views' bounds: anything outside is never on screen.
    pub fn visible_limit(&self) -> Rect {
        let a = self.normal.bounds();
        let b = self.zoomed.bounds();
        Rect::new(a.min.min(b.min), a.max.max(b.max))
    }
}
