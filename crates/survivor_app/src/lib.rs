//! Window, event loop and frame pacing for games built on `survivor_core`.
//!
//! ```rust,ignore
//! use survivor_app::{App, AppContext, GameApp};
//!
//! struct MyGame;
//!
//! impl GameApp for MyGame {
//!     fn fixed_update(&mut self, dt: f32, ctx: &mut AppContext) {
//!         if ctx.input.is_key_pressed(survivor_app::KeyCode::Escape) {
//!             ctx.request_exit();
//!         }
//!     }
//! }
//!
//! fn main() -> anyhow::Result<()> {
//!     survivor_app::logging::init(log::LevelFilter::Info)?;
//!     App::new(MyGame).with_title("My Game").run()
//! }
//! ```

pub mod builder;
pub mod context;
mod graphics;
pub mod logging;
mod runner;
pub mod traits;

pub use builder::{App, AppConfig};
pub use context::AppContext;
pub use traits::GameApp;

pub use survivor_core::{
    Color, DrawList, InputEvent, InputState, KeyCode, MouseButton, Time, View2D,
};
