use survivor_app::{AppContext, GameApp};
use survivor_assets::ImageStore;
use survivor_core::{DrawList, InputEvent, View2D};
use survivor_game::GameState;

/// Glue between the window runner and the window-independent game.
pub struct Shooter {
    state: GameState,
    /// Handed to the renderer in `setup`, then dropped.
    images: Option<ImageStore>,
}

impl Shooter {
    pub fn new(state: GameState, images: ImageStore) -> Self {
        Self {
            state,
            images: Some(images),
        }
    }
}

impl GameApp for Shooter {
    fn setup(&mut self, ctx: &mut AppContext) {
        let (width, height) = ctx.window_size;
        self.state.set_window_size(width, height);
        if let (Some(images), Some(renderer)) = (self.images.take(), ctx.renderer()) {
            renderer.upload_images(&images);
        }
    }

    fn on_input(&mut self, event: &InputEvent, ctx: &mut AppContext) {
        self.state.handle_input(event);
        if !self.state.is_running() {
            ctx.request_exit();
        }
    }

    fn fixed_update(&mut self, dt: f32, ctx: &mut AppContext) {
        self.state.update(ctx.input, dt);
    }

    fn draw(&mut self, list: &mut DrawList, _ctx: &mut AppContext) {
        self.state.render(list);
    }

    fn view(&self, _ctx: &AppContext) -> View2D {
        self.state.view()
    }
}
