use survivor_core::{DrawList, InputEvent, View2D};

use crate::context::AppContext;

/// Callbacks the runner drives.  Every method has a default so a game only
/// overrides what it uses.
///
/// Per rendered frame the runner calls, in order: [`on_input`] for each
/// queued event, [`fixed_update`] as many times as the fixed-step clock
/// owes, then [`draw`] and [`view`].
///
/// [`on_input`]: GameApp::on_input
/// [`fixed_update`]: GameApp::fixed_update
/// [`draw`]: GameApp::draw
/// [`view`]: GameApp::view
#[allow(unused_variables)]
pub trait GameApp {
    /// Called once after the window and GPU are ready.  Upload textures here.
    fn setup(&mut self, ctx: &mut AppContext) {}

    /// One discrete input event, oldest first.
    fn on_input(&mut self, event: &InputEvent, ctx: &mut AppContext) {}

    /// One fixed-length simulation step of `dt` seconds.
    fn fixed_update(&mut self, dt: f32, ctx: &mut AppContext) {}

    /// Fill `list` with this frame's draw commands.
    fn draw(&mut self, list: &mut DrawList, ctx: &mut AppContext) {}

    /// Camera for this frame.  Defaults to one world unit per pixel.
    fn view(&self, ctx: &AppContext) -> View2D {
        View2D::from_extent(survivor_core::glam::Vec2::new(ctx.width() as f32, ctx.height() as f32))
    }

    /// The surface has already been reconfigured when this runs.
    fn on_resize(&mut self, new_size: (u32, u32), ctx: &mut AppContext) {}
}
