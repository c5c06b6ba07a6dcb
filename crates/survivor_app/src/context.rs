use survivor_core::{InputState, Time};
use survivor_renderer::Renderer;
use winit::window::Window;

/// Per-frame context passed to every [`GameApp`](crate::GameApp) callback.
pub struct AppContext<'a> {
    /// Held keys, held buttons and cursor position.
    pub input: &'a InputState,

    /// Timing of the rendered frame, not of the fixed update.
    pub time: Time,

    /// Current window size in physical pixels.
    pub window_size: (u32, u32),

    pub window: &'a Window,

    /// `None` only while the renderer is lent out elsewhere.
    pub renderer: Option<&'a mut Renderer>,

    pub(crate) exit_requested: bool,
}

impl<'a> AppContext<'a> {
    /// Stop the event loop after the current frame.
    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    pub fn renderer(&mut self) -> Option<&mut Renderer> {
        self.renderer.as_deref_mut()
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.window_size.0
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.window_size.1
    }
}
